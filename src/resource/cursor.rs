//! Cursor-based pagination over resource collections.
//!
//! Collection endpoints return one page of entities plus a `next_cursor`
//! token. [`Cursor`] wraps a page and knows how to fetch the next one by
//! replaying the original request parameters with `cursor` set to the
//! token.

use std::collections::HashMap;

use crate::account::Account;
use crate::resource::endpoints::collection_path;
use crate::resource::errors::ResourceError;
use crate::resource::resource::Resource;
use crate::clients::HttpResponse;

/// A page of entities with the state needed to fetch the next one.
///
/// The cursor keeps the request parameters of the original listing so
/// filters survive across pages.
///
/// # Example
///
/// ```rust,ignore
/// let mut cursor = Campaign::all(&account, None).await?;
///
/// while let Some(page) = cursor.next_page(&account).await? {
///     for campaign in page {
///         println!("{:?}", campaign.id());
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Cursor<R: Resource> {
    items: Vec<R>,
    next_cursor: Option<String>,
    total_count: Option<u64>,
    params: HashMap<String, String>,
}

impl<R: Resource> Cursor<R> {
    /// Builds a cursor from a collection response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingData`] if the body has no `data`
    /// field, [`ResourceError::UnexpectedValue`] if it is not an array, or
    /// a hydration error from any element.
    pub fn from_response(
        response: &HttpResponse,
        params: HashMap<String, String>,
    ) -> Result<Self, ResourceError> {
        let data = response.data().ok_or(ResourceError::MissingData {
            resource: R::NAME,
        })?;

        let entries = data.as_array().ok_or(ResourceError::UnexpectedValue {
            expected: "array",
            found: if data.is_object() { "object" } else { "value" },
        })?;

        let mut items = Vec::with_capacity(entries.len());
        for entry in entries {
            let mut item = R::default();
            item.from_response(entry)?;
            items.push(item);
        }

        Ok(Self {
            items,
            next_cursor: response.next_cursor().map(String::from),
            total_count: response.total_count(),
            params,
        })
    }

    /// Returns the entities of the current page.
    #[must_use]
    pub fn items(&self) -> &[R] {
        &self.items
    }

    /// Returns the pagination token for the next page, if any.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref()
    }

    /// Returns the total entity count reported by the API, if any.
    #[must_use]
    pub const fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    /// Returns `true` if there are no further pages to fetch.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.next_cursor.is_none()
    }

    /// Fetches the next page, replacing the current one.
    ///
    /// Returns `Ok(None)` when the cursor is exhausted. The original
    /// request parameters are replayed with `cursor` set to the token.
    /// Cursor state only advances once the new page has been fetched and
    /// hydrated, so a failed fetch leaves the token in place and can be
    /// retried.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport or API failure, or a
    /// hydration error from the new page.
    pub async fn next_page(&mut self, account: &Account) -> Result<Option<&[R]>, ResourceError> {
        let Some(token) = self.next_cursor.clone() else {
            return Ok(None);
        };

        tracing::debug!(resource = R::NAME, cursor = %token, "fetching next page");

        let mut params = self.params.clone();
        params.insert("cursor".to_string(), token);

        let path = collection_path(&R::ENDPOINTS, account.id().as_ref());
        let response = account.client().get(path, Some(params)).await?;

        let page = Self::from_response(&response, self.params.clone())?;
        self.items = page.items;
        self.next_cursor = page.next_cursor;
        self.total_count = page.total_count.or(self.total_count);

        Ok(Some(&self.items))
    }

    /// Consumes the cursor and collects every remaining page into one
    /// vector, starting with the current page.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered while fetching pages.
    pub async fn collect_all(mut self, account: &Account) -> Result<Vec<R>, ResourceError> {
        let mut collected = std::mem::take(&mut self.items);

        while self.next_page(account).await?.is_some() {
            collected.append(&mut self.items);
        }

        Ok(collected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::endpoints::ResourceEndpoints;
    use crate::resource::fields::FieldBag;
    use serde_json::json;
    use std::collections::HashMap as Map;

    #[derive(Debug, Clone, Default)]
    struct MockLineItem {
        fields: FieldBag,
    }

    impl Resource for MockLineItem {
        const NAME: &'static str = "line_item";
        const ENDPOINTS: ResourceEndpoints = ResourceEndpoints::new(
            "accounts/{account_id}/line_items",
            "accounts/{account_id}/line_items/{id}",
        );
        const PROPERTIES: &'static [&'static str] = &["name", "campaign_id"];

        fn fields(&self) -> &FieldBag {
            &self.fields
        }

        fn fields_mut(&mut self) -> &mut FieldBag {
            &mut self.fields
        }
    }

    fn page_response(body: serde_json::Value) -> HttpResponse {
        HttpResponse::new(200, Map::new(), body)
    }

    #[test]
    fn test_from_response_hydrates_each_entry() {
        let response = page_response(json!({
            "data": [{"id": "li-1"}, {"id": "li-2"}],
            "next_cursor": "c-42",
            "total_count": 7
        }));

        let cursor: Cursor<MockLineItem> =
            Cursor::from_response(&response, HashMap::new()).unwrap();

        assert_eq!(cursor.items().len(), 2);
        assert_eq!(cursor.items()[0].id(), Some("li-1"));
        assert_eq!(cursor.next_cursor(), Some("c-42"));
        assert_eq!(cursor.total_count(), Some(7));
        assert!(!cursor.is_exhausted());
    }

    #[test]
    fn test_from_response_without_next_cursor_is_exhausted() {
        let response = page_response(json!({"data": []}));
        let cursor: Cursor<MockLineItem> =
            Cursor::from_response(&response, HashMap::new()).unwrap();

        assert!(cursor.is_exhausted());
        assert!(cursor.items().is_empty());
    }

    #[test]
    fn test_from_response_rejects_object_data() {
        let response = page_response(json!({"data": {"id": "li-1"}}));
        let err = Cursor::<MockLineItem>::from_response(&response, HashMap::new()).unwrap_err();

        assert!(matches!(
            err,
            ResourceError::UnexpectedValue {
                expected: "array",
                ..
            }
        ));
    }

    #[test]
    fn test_from_response_requires_data_field() {
        let response = page_response(json!({"next_cursor": "c-1"}));
        let err = Cursor::<MockLineItem>::from_response(&response, HashMap::new()).unwrap_err();

        assert!(matches!(
            err,
            ResourceError::MissingData {
                resource: "line_item"
            }
        ));
    }
}
