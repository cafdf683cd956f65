use demosynth_core::{DeclarationGroup, Error, Person, Result};

/// Linear scan for the first person with the given id.
pub fn find_by_id<'a>(people: &'a [Person], id: &str) -> Option<&'a Person> {
    people.iter().find(|person| person.id == id)
}

/// Person with the maximum age; the earliest-indexed one on ties.
pub fn oldest(people: &[Person]) -> Result<&Person> {
    max_by(people.iter(), |person| person.age as f64).ok_or(Error::EmptyCollection)
}

/// Person with the maximum net worth; the earliest-indexed one on ties.
pub fn richest(people: &[Person]) -> Result<&Person> {
    max_by(people.iter(), |person| person.net_worth).ok_or(Error::EmptyCollection)
}

/// Oldest person born in `city`; fails when nobody matches the city.
pub fn oldest_in_city<'a>(people: &'a [Person], city: &str) -> Result<&'a Person> {
    let subset = people.iter().filter(|person| person.birth_city == city);
    max_by(subset, |person| person.age as f64).ok_or_else(|| Error::NoMatch(format!("city {city}")))
}

/// Richest person born in `city`; fails when nobody matches the city.
pub fn richest_in_city<'a>(people: &'a [Person], city: &str) -> Result<&'a Person> {
    let subset = people.iter().filter(|person| person.birth_city == city);
    max_by(subset, |person| person.net_worth)
        .ok_or_else(|| Error::NoMatch(format!("city {city}")))
}

/// Richest person in a declaration group; fails when the group is empty.
pub fn richest_in_group(people: &[Person], group: DeclarationGroup) -> Result<&Person> {
    let subset = people
        .iter()
        .filter(|person| person.declaration_group == group);
    max_by(subset, |person| person.net_worth)
        .ok_or_else(|| Error::NoMatch(format!("group {group}")))
}

/// All members of a declaration group in original order. An absent group
/// yields an empty list, not an error.
pub fn list_by_group(people: &[Person], group: DeclarationGroup) -> Vec<&Person> {
    people
        .iter()
        .filter(|person| person.declaration_group == group)
        .collect()
}

/// Left-to-right max with strict `>`, so the first maximal element wins.
fn max_by<'a, I, F>(people: I, key: F) -> Option<&'a Person>
where
    I: Iterator<Item = &'a Person>,
    F: Fn(&Person) -> f64,
{
    let mut best: Option<&Person> = None;
    for person in people {
        match best {
            Some(current) if key(person) > key(current) => best = Some(person),
            None => best = Some(person),
            _ => {}
        }
    }
    best
}
