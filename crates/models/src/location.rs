use serde::Serialize;
use std::collections::BTreeMap;

/// All venues that share one city and state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityGroup<T> {
    pub city: String,
    pub state: String,
    pub venues: Vec<T>,
}

impl<T> CityGroup<T> {
    pub fn map<U, F>(self, f: F) -> CityGroup<U>
    where
        F: FnMut(T) -> U,
    {
        CityGroup {
            city: self.city,
            state: self.state,
            venues: self.venues.into_iter().map(f).collect(),
        }
    }
}

/// Groups items by `(city, state)`.
///
/// Groups come out ordered by city, then state. Items keep their input order
/// inside a group, and every item lands in exactly one group.
pub fn group_by_location<T, I, F>(items: I, location_of: F) -> Vec<CityGroup<T>>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> (String, String),
{
    let mut groups: BTreeMap<(String, String), Vec<T>> = BTreeMap::new();

    for item in items {
        groups.entry(location_of(&item)).or_default().push(item);
    }

    groups
        .into_iter()
        .map(|((city, state), venues)| CityGroup {
            city,
            state,
            venues,
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Place {
        id: i32,
        city: &'static str,
        state: &'static str,
    }

    fn place(id: i32, city: &'static str, state: &'static str) -> Place {
        Place { id, city, state }
    }

    fn key(p: &Place) -> (String, String) {
        (p.city.to_string(), p.state.to_string())
    }

    #[test]
    fn test_groups_shared_locations() {
        let places = vec![
            place(1, "San Francisco", "CA"),
            place(2, "New York", "NY"),
            place(3, "San Francisco", "CA"),
        ];

        let groups = group_by_location(places, key);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].city, "New York");
        assert_eq!(groups[1].city, "San Francisco");
        let ids: Vec<i32> = groups[1].venues.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn test_same_city_different_state_is_split() {
        let places = vec![place(1, "Portland", "OR"), place(2, "Portland", "ME")];

        let groups = group_by_location(places, key);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].state, "ME");
        assert_eq!(groups[1].state, "OR");
    }

    #[test]
    fn test_every_item_appears_once() {
        let places: Vec<Place> = (0..20)
            .map(|i| place(i, ["A", "B", "C"][i as usize % 3], "ST"))
            .collect();

        let groups = group_by_location(places, key);

        let mut ids: Vec<i32> = groups
            .iter()
            .flat_map(|g| g.venues.iter().map(|p| p.id))
            .collect();
        ids.sort();
        assert_eq!(ids, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_map_keeps_location() {
        let groups = group_by_location(vec![place(7, "Austin", "TX")], key);
        let mapped = groups.into_iter().next().unwrap().map(|p| p.id);

        assert_eq!(mapped.city, "Austin");
        assert_eq!(mapped.state, "TX");
        assert_eq!(mapped.venues, [7]);
    }

    #[test]
    fn test_empty_input() {
        let groups = group_by_location(Vec::<Place>::new(), key);
        assert!(groups.is_empty());
    }
}
