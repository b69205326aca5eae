use models::{forms::NewVenue, genres::Genres};
use sea_orm::{ActiveValue::NotSet, Set, entity::prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "venues")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub genres: Genres,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: String,
    pub facebook_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
    pub image_link: String,
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

// Many-to-many relationship with artists through shows
impl Related<super::artist::Entity> for Entity {
    fn to() -> RelationDef {
        super::show::Relation::Artist.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::show::Relation::Venue.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Every mutable column set from a validated submission
impl From<NewVenue> for ActiveModel {
    fn from(venue: NewVenue) -> Self {
        Self {
            id: NotSet,
            name: Set(venue.name),
            genres: Set(venue.genres),
            address: Set(venue.address),
            city: Set(venue.city),
            state: Set(venue.state),
            phone: Set(venue.phone),
            website: Set(venue.website),
            facebook_link: Set(venue.facebook_link),
            seeking_talent: Set(venue.seeking_talent),
            seeking_description: Set(venue.seeking_description),
            image_link: Set(venue.image_link),
        }
    }
}

impl From<Model> for NewVenue {
    fn from(venue: Model) -> Self {
        Self {
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            genres: venue.genres,
            website: venue.website,
            facebook_link: venue.facebook_link,
            image_link: venue.image_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
        }
    }
}
