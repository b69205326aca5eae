use crate::{datetime::parse_timestamp, genres::Genres};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use thiserror::Error;

/// Checkbox values browsers and clients send for a ticked box
const TRUTHY: [&str; 5] = ["y", "yes", "on", "true", "1"];

/// Problem with a single submitted field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("{field} is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl FieldError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field } | Self::Invalid { field, .. } => *field,
        }
    }
}

/// Every field problem found in one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn fields(&self) -> Vec<&'static str> {
        self.errors.iter().map(FieldError::field).collect()
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let messages: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// Collects field errors while a form is converted
#[derive(Default)]
struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    fn required(&mut self, field: &'static str, value: &Option<String>) -> String {
        match non_blank(value) {
            Some(value) => value,
            None => {
                self.errors.push(FieldError::Missing { field });
                String::new()
            }
        }
    }

    fn link(&mut self, field: &'static str, value: &Option<String>) -> Option<String> {
        let value = non_blank(value)?;
        if value.starts_with("http://") || value.starts_with("https://") {
            Some(value)
        } else {
            self.errors.push(FieldError::Invalid {
                field,
                reason: "must be an http(s) URL".to_string(),
            });
            None
        }
    }

    fn genres(&mut self, values: &[String]) -> Genres {
        let genres = Genres::new(
            values
                .iter()
                .flat_map(|raw| Genres::parse_delimited(raw).into_vec()),
        );
        if genres.is_empty() {
            self.errors.push(FieldError::Missing { field: "genres" });
        }
        genres
    }

    fn id(&mut self, field: &'static str, value: &Option<String>) -> i32 {
        let Some(raw) = non_blank(value) else {
            self.errors.push(FieldError::Missing { field });
            return 0;
        };

        match raw.parse::<i32>() {
            Ok(id) if id > 0 => id,
            _ => {
                self.errors.push(FieldError::Invalid {
                    field,
                    reason: format!("`{raw}` is not a valid id"),
                });
                0
            }
        }
    }

    fn timestamp(&mut self, field: &'static str, value: &Option<String>) -> NaiveDateTime {
        let Some(raw) = non_blank(value) else {
            self.errors.push(FieldError::Missing { field });
            return NaiveDateTime::default();
        };

        parse_timestamp(&raw).unwrap_or_else(|e| {
            self.errors.push(FieldError::Invalid {
                field,
                reason: e.to_string(),
            });
            NaiveDateTime::default()
        })
    }

    fn finish<T>(self, value: T) -> Result<T, ValidationError> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError {
                errors: self.errors,
            })
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

fn checked(value: &Option<String>) -> bool {
    value
        .as_deref()
        .map(|v| TRUTHY.contains(&v.trim().to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn checkbox(value: bool) -> Option<String> {
    value.then(|| "y".to_string())
}

/// Venue fields as submitted by the create and edit forms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct VenueForm {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    /// One value per selected genre; a single value may also hold a
    /// comma-separated list
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(alias = "website")]
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_talent: Option<String>,
    pub seeking_description: Option<String>,
}

/// A validated venue ready to be written
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Genres,
    pub website: String,
    pub facebook_link: String,
    pub image_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl VenueForm {
    pub fn validate(&self) -> Result<NewVenue, ValidationError> {
        let mut check = Checker::default();

        let venue = NewVenue {
            name: check.required("name", &self.name),
            city: check.required("city", &self.city),
            state: check.required("state", &self.state),
            address: check.required("address", &self.address),
            phone: check.required("phone", &self.phone),
            genres: check.genres(&self.genres),
            website: check
                .link("website_link", &self.website_link)
                .unwrap_or_default(),
            facebook_link: check
                .link("facebook_link", &self.facebook_link)
                .unwrap_or_default(),
            image_link: check.link("image_link", &self.image_link).unwrap_or_default(),
            seeking_talent: checked(&self.seeking_talent),
            seeking_description: non_blank(&self.seeking_description).unwrap_or_default(),
        };

        check.finish(venue)
    }
}

impl From<NewVenue> for VenueForm {
    fn from(venue: NewVenue) -> Self {
        Self {
            name: Some(venue.name),
            city: Some(venue.city),
            state: Some(venue.state),
            address: Some(venue.address),
            phone: Some(venue.phone),
            genres: venue.genres.into_vec(),
            website_link: Some(venue.website),
            facebook_link: Some(venue.facebook_link),
            image_link: Some(venue.image_link),
            seeking_talent: checkbox(venue.seeking_talent),
            seeking_description: Some(venue.seeking_description),
        }
    }
}

/// Artist fields as submitted by the create and edit forms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ArtistForm {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    /// One value per selected genre; a single value may also hold a
    /// comma-separated list
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(alias = "website")]
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_venue: Option<String>,
    pub seeking_description: Option<String>,
}

/// A validated artist ready to be written
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Genres,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    pub fn validate(&self) -> Result<NewArtist, ValidationError> {
        let mut check = Checker::default();

        let artist = NewArtist {
            name: check.required("name", &self.name),
            city: check.required("city", &self.city),
            state: check.required("state", &self.state),
            phone: non_blank(&self.phone),
            genres: check.genres(&self.genres),
            website: check.link("website_link", &self.website_link),
            facebook_link: check.link("facebook_link", &self.facebook_link),
            image_link: check.link("image_link", &self.image_link),
            seeking_venue: checked(&self.seeking_venue),
            seeking_description: non_blank(&self.seeking_description),
        };

        check.finish(artist)
    }
}

impl From<NewArtist> for ArtistForm {
    fn from(artist: NewArtist) -> Self {
        Self {
            name: Some(artist.name),
            city: Some(artist.city),
            state: Some(artist.state),
            phone: artist.phone,
            genres: artist.genres.into_vec(),
            website_link: artist.website,
            facebook_link: artist.facebook_link,
            image_link: artist.image_link,
            seeking_venue: checkbox(artist.seeking_venue),
            seeking_description: artist.seeking_description,
        }
    }
}

/// Show fields as submitted by the create form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ShowForm {
    pub artist_id: Option<String>,
    pub venue_id: Option<String>,
    pub start_time: Option<String>,
}

/// A validated show ready to be written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewShow {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: NaiveDateTime,
}

impl ShowForm {
    /// Blank form with the start time pre-filled
    pub fn with_defaults(now: NaiveDateTime) -> Self {
        Self {
            start_time: Some(now.format("%Y-%m-%d %H:%M:%S").to_string()),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<NewShow, ValidationError> {
        let mut check = Checker::default();

        let show = NewShow {
            artist_id: check.id("artist_id", &self.artist_id),
            venue_id: check.id("venue_id", &self.venue_id),
            start_time: check.timestamp("start_time", &self.start_time),
        };

        check.finish(show)
    }
}
