use models::{forms::NewArtist, genres::Genres};
use sea_orm::{ActiveValue::NotSet, Set, entity::prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "artists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub genres: Genres,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
}

impl Model {
    /// Name used for display and search, blank when unset
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::show::Entity")]
    Shows,
}

impl Related<super::show::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shows.def()
    }
}

// Many-to-many relationship with venues through shows
impl Related<super::venue::Entity> for Entity {
    fn to() -> RelationDef {
        super::show::Relation::Venue.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::show::Relation::Artist.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<NewArtist> for ActiveModel {
    fn from(artist: NewArtist) -> Self {
        Self {
            id: NotSet,
            name: Set(Some(artist.name)),
            genres: Set(artist.genres),
            city: Set(Some(artist.city)),
            state: Set(Some(artist.state)),
            phone: Set(artist.phone),
            website: Set(artist.website),
            facebook_link: Set(artist.facebook_link),
            seeking_venue: Set(artist.seeking_venue),
            seeking_description: Set(artist.seeking_description),
            image_link: Set(artist.image_link),
        }
    }
}

impl From<Model> for NewArtist {
    fn from(artist: Model) -> Self {
        Self {
            name: artist.name.unwrap_or_default(),
            city: artist.city.unwrap_or_default(),
            state: artist.state.unwrap_or_default(),
            phone: artist.phone,
            genres: artist.genres,
            website: artist.website,
            facebook_link: artist.facebook_link,
            image_link: artist.image_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
        }
    }
}
