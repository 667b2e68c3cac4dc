use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::shared::validation::{require, ValidationError};

// ============================================================================
// Association
// ============================================================================

/// What a promotion links to in the storefront
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AssociationKind {
    #[default]
    Brand,
    Category,
}

impl AssociationKind {
    pub fn code(&self) -> &'static str {
        match self {
            AssociationKind::Brand => "brand",
            AssociationKind::Category => "category",
        }
    }

    /// Form value expected by the promotion endpoints
    pub fn display_name(&self) -> &'static str {
        match self {
            AssociationKind::Brand => "Brand",
            AssociationKind::Category => "Category",
        }
    }

    pub fn all() -> Vec<AssociationKind> {
        vec![AssociationKind::Brand, AssociationKind::Category]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "brand" => Some(AssociationKind::Brand),
            "category" => Some(AssociationKind::Category),
            _ => None,
        }
    }

    /// Multipart field that carries the referenced id
    pub fn id_field(&self) -> &'static str {
        self.code()
    }
}

impl fmt::Display for AssociationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for AssociationKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

impl<'de> Deserialize<'de> for AssociationKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        AssociationKind::from_code(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown association: {raw}")))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Association {
    pub kind: AssociationKind,
    pub target_id: String,
}

impl Association {
    fn from_parts(kind: AssociationKind, brand: &Option<String>, category: &Option<String>) -> Self {
        let target_id = match kind {
            AssociationKind::Brand => brand.clone(),
            AssociationKind::Category => category.clone(),
        };
        Self {
            kind,
            target_id: target_id.unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.kind {
            AssociationKind::Brand => require("Brand", &self.target_id),
            AssociationKind::Category => require("Category", &self.target_id),
        }
    }

    /// `association` plus the `brand` or `category` id field
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("association", self.kind.display_name().to_string()),
            (self.kind.id_field(), self.target_id.clone()),
        ]
    }
}

// ============================================================================
// Carousel
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub carousel_title: String,
    #[serde(default)]
    pub carousel_description: String,
    #[serde(default)]
    pub carousel_url: String,
    #[serde(default)]
    pub carousel_association: AssociationKind,
    #[serde(default)]
    pub carousel_brand: Option<String>,
    #[serde(default)]
    pub carousel_category: Option<String>,
}

impl CarouselItem {
    pub fn association(&self) -> Association {
        Association::from_parts(
            self.carousel_association,
            &self.carousel_brand,
            &self.carousel_category,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarouselForm {
    pub title: String,
    pub description: String,
    pub association: Association,
}

impl CarouselForm {
    pub fn from_item(item: &CarouselItem) -> Self {
        Self {
            title: item.carousel_title.clone(),
            description: item.carousel_description.clone(),
            association: item.association(),
        }
    }

    pub fn validate(&self, has_image: bool, is_new: bool) -> Result<(), ValidationError> {
        require("Title", &self.title)?;
        self.association.validate()?;
        if is_new && !has_image {
            return Err(ValidationError::Required("Carousel image"));
        }
        Ok(())
    }

    /// Text parts; an update also carries `carousel_id`
    pub fn fields(&self, editing: Option<&str>) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("title", self.title.trim().to_string()),
            ("description", self.description.clone()),
        ];
        fields.extend(self.association.fields());
        if let Some(id) = editing {
            fields.push(("carousel_id", id.to_string()));
        }
        fields
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CarouselIdQuery<'a> {
    pub carousel_id: &'a str,
}

// ============================================================================
// Banner
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BannerItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub banner_url: String,
    #[serde(default)]
    pub banner_association: AssociationKind,
    #[serde(default)]
    pub banner_brand: Option<String>,
    #[serde(default)]
    pub banner_category: Option<String>,
}

impl BannerItem {
    pub fn association(&self) -> Association {
        Association::from_parts(
            self.banner_association,
            &self.banner_brand,
            &self.banner_category,
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BannerIdQuery<'a> {
    pub banner_id: &'a str,
}

// ============================================================================
// Countdown
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountdownItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub countdown_title: String,
    #[serde(default)]
    pub countdown_description: String,
    #[serde(default)]
    pub countdown_discount: String,
    #[serde(default)]
    pub countdown_end_time: String,
    #[serde(default)]
    pub countdown_url: String,
    #[serde(default)]
    pub countdown_association: AssociationKind,
    #[serde(default)]
    pub countdown_brand: Option<String>,
    #[serde(default)]
    pub countdown_category: Option<String>,
}

impl CountdownItem {
    pub fn association(&self) -> Association {
        Association::from_parts(
            self.countdown_association,
            &self.countdown_brand,
            &self.countdown_category,
        )
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        parse_end_time(&self.countdown_end_time)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountdownForm {
    pub title: String,
    pub description: String,
    pub discount: String,
    /// `datetime-local` input value or RFC 3339
    pub end_time: String,
    pub association: Association,
}

impl CountdownForm {
    pub fn validate(&self, has_image: bool, now: DateTime<Utc>) -> Result<(), ValidationError> {
        require("Title", &self.title)?;
        require("End time", &self.end_time)?;
        match parse_end_time(&self.end_time) {
            Some(end) if end > now => {}
            Some(_) => {
                return Err(ValidationError::Invalid(
                    "End time must be in the future".into(),
                ))
            }
            None => return Err(ValidationError::Invalid("End time is not a valid date".into())),
        }
        self.association.validate()?;
        if !has_image {
            return Err(ValidationError::Required("Countdown image"));
        }
        Ok(())
    }

    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("title", self.title.trim().to_string()),
            ("description", self.description.clone()),
            ("discount", self.discount.trim().to_string()),
            ("endTime", self.end_time.clone()),
        ];
        fields.extend(self.association.fields());
        fields
    }
}

/// Accepts RFC 3339 and the browser's `YYYY-MM-DDTHH:MM[:SS]` (taken as UTC)
pub fn parse_end_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Time left on a countdown, clamped at zero once it has passed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    pub fn is_expired(&self) -> bool {
        *self == Remaining::default()
    }

    /// Zero-padded `[dd, hh, mm, ss]` for the ticking display
    pub fn padded(&self) -> [String; 4] {
        [
            format!("{:02}", self.days),
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        ]
    }
}

pub fn countdown_remaining(end: DateTime<Utc>, now: DateTime<Utc>) -> Remaining {
    let secs = (end - now).num_seconds().max(0);
    Remaining {
        days: secs / 86_400,
        hours: secs % 86_400 / 3_600,
        minutes: secs % 3_600 / 60,
        seconds: secs % 60,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PromotionListResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_time() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 3, 5, 4, 9).unwrap();
        let left = countdown_remaining(end, now);
        assert_eq!(
            left,
            Remaining {
                days: 2,
                hours: 5,
                minutes: 4,
                seconds: 9
            }
        );
        assert_eq!(left.padded(), ["02", "05", "04", "09"]);
    }

    #[test]
    fn test_expired_clamps_to_zero() {
        let now = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();
        let left = countdown_remaining(end, now);
        assert!(left.is_expired());
        assert_eq!(left.padded(), ["00", "00", "00", "00"]);
    }

    #[test]
    fn test_parse_end_time_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 6, 1, 18, 30, 0).unwrap();
        assert_eq!(parse_end_time("2024-06-01T18:30"), Some(expected));
        assert_eq!(parse_end_time("2024-06-01T18:30:00.000Z"), Some(expected));
        assert_eq!(parse_end_time("2024-06-01T20:30:00+02:00"), Some(expected));
        assert_eq!(parse_end_time("tomorrow"), None);
    }

    #[test]
    fn test_parse_carousel_association() {
        let raw = r#"{"success":true,"message":"ok","data":[{
            "_id":"k1","carousel_title":"Summer","carousel_description":"",
            "carousel_url":"https://cdn/k1.png","carousel_association":"Category",
            "carousel_category":"c7"
        }]}"#;
        let list: PromotionListResponse<CarouselItem> = serde_json::from_str(raw).unwrap();
        let assoc = list.data[0].association();
        assert_eq!(assoc.kind, AssociationKind::Category);
        assert_eq!(assoc.target_id, "c7");
    }

    #[test]
    fn test_carousel_form_fields() {
        let form = CarouselForm {
            title: "Summer".into(),
            description: "Up to 50% off".into(),
            association: Association {
                kind: AssociationKind::Brand,
                target_id: "b1".into(),
            },
        };
        assert!(form.validate(true, true).is_ok());
        assert!(form.validate(false, true).is_err());
        let fields = form.fields(Some("k1"));
        assert!(fields.contains(&("association", "Brand".to_string())));
        assert!(fields.contains(&("brand", "b1".to_string())));
        assert!(fields.contains(&("carousel_id", "k1".to_string())));
    }

    #[test]
    fn test_countdown_form_rules() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut form = CountdownForm {
            title: "Flash sale".into(),
            description: String::new(),
            discount: "20% OFF".into(),
            end_time: "2023-12-31T10:00".into(),
            association: Association {
                kind: AssociationKind::Category,
                target_id: "c1".into(),
            },
        };
        assert_eq!(
            form.validate(true, now),
            Err(ValidationError::Invalid("End time must be in the future".into()))
        );
        form.end_time = "2024-01-02T10:00".into();
        assert!(form.validate(true, now).is_ok());
        assert!(form.fields().contains(&("category", "c1".to_string())));
    }
}
