use async_trait::async_trait;
use serde_json::{json, Value};

use pageprops_core::content::ContentItem;
use pageprops_core::modules::{CustomPropsContext, CustomPropsHook};
use pageprops_core::sync::Result;

/// Content list used when a listing module does not link one.
const DEFAULT_POSTS_LIST: &str = "posts";

/// Summary of a post as shown in listings.
fn post_summary(post: &ContentItem) -> Value {
    json!({
        "contentID": post.content_id,
        "title": post.field_str("title"),
        "slug": post.field_str("slug"),
        "date": post.field_str("date"),
    })
}

/// Reference name of the list linked from the module's `posts` field.
fn linked_list(item: Option<&ContentItem>) -> &str {
    item.and_then(|item| item.fields.get("posts"))
        .and_then(|posts| posts.get("referencename"))
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_POSTS_LIST)
}

/// Loads the posts shown by a listing module.
#[derive(Debug, Clone, Copy)]
pub struct PostsListing;

#[async_trait]
impl CustomPropsHook for PostsListing {
    async fn custom_props(&self, ctx: CustomPropsContext<'_>) -> Result<Option<Value>> {
        let list = linked_list(ctx.item);
        let posts = ctx.store.get_content_list(list, ctx.language_code).await?;

        tracing::debug!(list = %list, count = posts.len(), "Loaded posts");

        let posts: Vec<Value> = posts.iter().map(post_summary).collect();
        Ok(Some(json!({ "posts": posts })))
    }
}

/// Loads the post behind a dynamic page.
#[derive(Debug, Clone, Copy)]
pub struct PostDetails;

#[async_trait]
impl CustomPropsHook for PostDetails {
    async fn custom_props(&self, ctx: CustomPropsContext<'_>) -> Result<Option<Value>> {
        let Some(content_id) = ctx.page_in_sitemap.and_then(|node| node.content_id) else {
            return Ok(None);
        };

        let post = ctx
            .store
            .get_content_item(content_id, ctx.language_code)
            .await?;

        match post {
            Some(post) => Ok(Some(json!({ "post": post }))),
            None => {
                tracing::warn!(content_id, "Dynamic page item not found");
                Ok(None)
            }
        }
    }
}
