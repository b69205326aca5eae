use serde::{Deserialize, Serialize};
use std::{
    convert::Infallible,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

#[cfg(feature = "database")]
use sea_orm::Value;

/// Ordered list of genre tags attached to a venue or an artist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Genres(Vec<String>);

impl Genres {
    /// Builds a list from raw tags, trimming whitespace and dropping blanks and repeats
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut genres = Vec::new();
        for tag in tags {
            let tag = tag.as_ref().trim();
            if !tag.is_empty() && !genres.iter().any(|g: &String| g == tag) {
                genres.push(tag.to_owned());
            }
        }

        Self(genres)
    }

    /// Parses a delimited encoding such as `Jazz, Folk` or the
    /// array-literal form `{Jazz,Folk}`
    pub fn parse_delimited(raw: &str) -> Self {
        let inner = raw.trim();
        let inner = inner.strip_prefix('{').unwrap_or(inner);
        let inner = inner.strip_suffix('}').unwrap_or(inner);

        Self::new(inner.split(',').map(|tag| tag.trim_matches('"')))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// Decodes the stored column value, accepting both the JSON array written
    /// by this crate and older delimited strings
    pub fn decode(stored: &str) -> Result<Self, serde_json::Error> {
        if stored.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<String>>(stored).map(Self::new)
        } else {
            Ok(Self::parse_delimited(stored))
        }
    }

    /// Encodes the list for storage as a JSON array
    pub fn encode(&self) -> String {
        serde_json::Value::from(self.0.clone()).to_string()
    }
}

impl FromStr for Genres {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_delimited(raw))
    }
}

impl Display for Genres {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0.join(", "))
    }
}

impl From<Vec<String>> for Genres {
    fn from(tags: Vec<String>) -> Self {
        Self::new(tags)
    }
}

impl From<Genres> for Vec<String> {
    fn from(genres: Genres) -> Self {
        genres.0
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::ValueType for Genres {
    fn try_from(v: Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
        match v {
            Value::String(Some(s)) => {
                Genres::decode(&s).map_err(|_| sea_orm::sea_query::ValueTypeErr)
            }
            _ => Err(sea_orm::sea_query::ValueTypeErr),
        }
    }

    fn type_name() -> String {
        "Genres".to_string()
    }

    fn array_type() -> sea_orm::sea_query::ArrayType {
        sea_orm::sea_query::ArrayType::String
    }

    fn column_type() -> sea_orm::sea_query::ColumnType {
        sea_orm::sea_query::ColumnType::Text
    }
}

#[cfg(feature = "database")]
impl From<Genres> for Value {
    fn from(genres: Genres) -> Self {
        Value::String(Some(Box::new(genres.encode())))
    }
}

#[cfg(feature = "database")]
impl sea_orm::TryGetable for Genres {
    fn try_get_by<I: sea_orm::ColIdx>(
        res: &sea_orm::QueryResult,
        index: I,
    ) -> Result<Self, sea_orm::TryGetError> {
        let val: String = res.try_get_by(index)?;

        Genres::decode(&val).map_err(|e| {
            sea_orm::TryGetError::DbErr(sea_orm::DbErr::Type(format!(
                "Failed to deserialize Genres: {e}"
            )))
        })
    }
}
