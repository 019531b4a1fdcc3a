//! Request shapes derived from [`Product`].
//!
//! Each shape is its own struct. The field mapping back to `Product`:
//!
//! | `Product` field | `CreateProductDto` | `UpdateProductDto` | `FindProductDto` |
//! |-----------------|--------------------|--------------------|------------------|
//! | `id`            | -                  | -                  | optional         |
//! | `title`         | required           | optional           | optional         |
//! | `color`         | required           | optional           | optional         |
//! | `description`   | required           | optional           | optional         |
//! | `created_at`    | -                  | -                  | optional         |
//! | `updated_at`    | -                  | -                  | optional         |
//! | `stock`         | required           | optional           | optional         |
//! | `size`          | optional           | optional           | optional         |
//! | `category`      | via `category_id`  | via `category_id`  | optional         |
//! | `tags`          | required           | optional           | required, read-only |
//!
//! Keep this table in sync when a field is added to `Product`.

use super::product::{Category, CategoryId, Product, ProductId, Size};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Payload for creating a new product.
///
/// `id`, timestamps and the embedded category are never supplied by the caller;
/// the category is built from `category_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDto {
    pub title: String,
    pub color: String,
    pub description: String,
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category_id: CategoryId,
}

/// Payload for updating an existing product.
///
/// Every field of [`CreateProductDto`], all optional. Present fields replace the
/// stored values; absent fields keep them.
///
/// `size` is optional on the product itself, so it takes two levels: `None` keeps
/// the stored size, `Some(None)` clears it and `Some(Some(size))` sets it. In JSON
/// these are an absent key, `null` and a value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductDto {
    pub title: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    pub stock: Option<u32>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<Option<Size>>,
    pub tags: Option<Vec<String>>,
    pub category_id: Option<CategoryId>,
}

/// Wraps any value that is present in the input, `null` included, in `Some`.
///
/// Paired with `#[serde(default)]` so a missing key stays `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Request accepted by a product listing.
///
/// Every `Product` field except `tags` is optional, and `tags` is always present.
/// Fields are fixed once the value is built: there are only `with_*` constructors
/// and read-only accessors, and `tags` is exposed as a slice.
///
/// ```rust
/// use catalog_recipe::model::{FindProductDto, Size};
///
/// let query = FindProductDto::new(["summer", "sale"])
///     .with_title("Shirt")
///     .with_size(Size::M);
///
/// assert_eq!(query.title(), Some("Shirt"));
/// assert_eq!(query.tags(), ["summer", "sale"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindProductDto {
    #[serde(default)]
    id: Option<ProductId>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    stock: Option<u32>,
    #[serde(default)]
    size: Option<Size>,
    #[serde(default)]
    category: Option<Category>,
    #[serde(default)]
    tags: Box<[String]>,
}

impl FindProductDto {
    /// Creates a request with the given tags and no other criteria.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_id(self, id: impl Into<ProductId>) -> Self {
        Self {
            id: Some(id.into()),
            ..self
        }
    }

    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..self
        }
    }

    pub fn with_color(self, color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..self
        }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }

    pub fn with_created_at(self, created_at: DateTime<Utc>) -> Self {
        Self {
            created_at: Some(created_at),
            ..self
        }
    }

    pub fn with_updated_at(self, updated_at: DateTime<Utc>) -> Self {
        Self {
            updated_at: Some(updated_at),
            ..self
        }
    }

    pub fn with_stock(self, stock: u32) -> Self {
        Self {
            stock: Some(stock),
            ..self
        }
    }

    pub fn with_size(self, size: Size) -> Self {
        Self {
            size: Some(size),
            ..self
        }
    }

    pub fn with_category(self, category: Category) -> Self {
        Self {
            category: Some(category),
            ..self
        }
    }

    pub fn id(&self) -> Option<&ProductId> {
        self.id.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn stock(&self) -> Option<u32> {
        self.stock
    }

    pub fn size(&self) -> Option<Size> {
        self.size
    }

    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl From<&Product> for FindProductDto {
    /// A request naming every field of `product`.
    fn from(product: &Product) -> Self {
        Self {
            id: Some(product.id.clone()),
            title: Some(product.title.clone()),
            color: Some(product.color.clone()),
            description: Some(product.description.clone()),
            created_at: Some(product.created_at),
            updated_at: Some(product.updated_at),
            stock: Some(product.stock),
            size: product.size,
            category: Some(product.category.clone()),
            tags: product.tags.clone().into_boxed_slice(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_dto_builder_and_accessors() {
        let query = FindProductDto::new(vec!["a".to_string()])
            .with_id("p-1")
            .with_stock(4)
            .with_color("red");

        assert_eq!(query.id(), Some(&ProductId::from("p-1")));
        assert_eq!(query.stock(), Some(4));
        assert_eq!(query.color(), Some("red"));
        assert_eq!(query.title(), None);
        assert_eq!(query.size(), None);
        assert_eq!(query.tags(), ["a".to_string()]);
    }

    #[test]
    fn test_find_dto_tags_default_to_empty() {
        let query: FindProductDto = serde_json::from_str(r#"{"title":"Shirt"}"#).unwrap();
        assert_eq!(query.title(), Some("Shirt"));
        assert!(query.tags().is_empty());
    }

    #[test]
    fn test_create_dto_uses_camel_case() {
        let json = r#"{
            "title": "Shirt",
            "color": "blue",
            "description": "Cotton",
            "stock": 3,
            "size": "XL",
            "categoryId": "c-1"
        }"#;
        let dto: CreateProductDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.category_id, CategoryId::from("c-1"));
        assert_eq!(dto.size, Some(Size::XL));
        assert!(dto.tags.is_empty());
    }

    #[test]
    fn test_update_dto_absent_fields_are_none() {
        let dto: UpdateProductDto = serde_json::from_str(r#"{"stock":5}"#).unwrap();
        assert_eq!(
            dto,
            UpdateProductDto {
                stock: Some(5),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_update_dto_size_distinguishes_absent_null_and_value() {
        let absent: UpdateProductDto = serde_json::from_str(r#"{}"#).unwrap();
        let cleared: UpdateProductDto = serde_json::from_str(r#"{"size":null}"#).unwrap();
        let set: UpdateProductDto = serde_json::from_str(r#"{"size":"S"}"#).unwrap();

        assert_eq!(absent.size, None);
        assert_eq!(cleared.size, Some(None));
        assert_eq!(set.size, Some(Some(Size::S)));
    }

    #[test]
    fn test_update_dto_serializes_clear_as_null() {
        let dto = UpdateProductDto {
            size: Some(None),
            ..Default::default()
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["size"], serde_json::Value::Null);
        assert!(json.as_object().unwrap().contains_key("size"));

        let json = serde_json::to_value(UpdateProductDto::default()).unwrap();
        assert!(!json.as_object().unwrap().contains_key("size"));
    }
}
