use getset::Getters;
use joinery::JoinableIterator;
use thiserror::Error;

#[derive(Clone, PartialEq, Eq, Debug, Getters)]
#[getset(get = "pub")]
pub struct MenuEntry<Id> {
    label: String,
    id: Id,
}
impl<Id> MenuEntry<Id> {
    pub fn new(label: impl Into<String>, id: Id) -> Self {
        Self {
            label: label.into(),
            id,
        }
    }
}

/// Choices shown to the operator, addressed by 1-based position.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Menu<Id> {
    entries: Vec<MenuEntry<Id>>,
}

#[derive(PartialEq, Eq, Debug, Error)]
pub enum MenuError {
    #[error("There is nothing to select")]
    Empty,
    #[error("Choice {0} is out of range; pick a number between 1 and {1}")]
    OutOfRange(usize, usize),
}

impl<Id> FromIterator<MenuEntry<Id>> for Menu<Id> {
    fn from_iter<I: IntoIterator<Item = MenuEntry<Id>>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<Id> Menu<Id> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[MenuEntry<Id>] {
        &self.entries
    }

    pub fn get(&self, choice: usize) -> Result<&MenuEntry<Id>, MenuError> {
        if self.is_empty() {
            return Err(MenuError::Empty);
        }
        choice
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .ok_or(MenuError::OutOfRange(choice, self.len()))
    }

    /// Case-insensitive lookup by label.
    pub fn find_by_label(&self, label: &str) -> Option<&MenuEntry<Id>> {
        self.entries
            .iter()
            .find(|x| x.label.to_lowercase() == label.to_lowercase())
    }

    /// One `\t<n>: <Label>` line per entry, labels in title case.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("\t{}: {}", i + 1, title_case(&entry.label)))
            .join_with("\n")
            .to_string()
    }
}

pub fn title_case(s: &str) -> String {
    let mut ret = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if prev_alpha {
            ret.extend(c.to_lowercase());
        } else {
            ret.extend(c.to_uppercase());
        }
        prev_alpha = c.is_alphabetic();
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::{title_case, Menu, MenuEntry, MenuError};

    fn menu() -> Menu<&'static str> {
        [("padel", "13"), ("tennis", "1"), ("sulkapallo", "4")]
            .into_iter()
            .map(|(label, id)| MenuEntry::new(label, id))
            .collect()
    }

    #[test]
    fn picks_by_one_based_position() {
        let menu = menu();
        assert_eq!(*menu.get(1).unwrap().id(), "13");
        assert_eq!(*menu.get(3).unwrap().id(), "4");
        assert_eq!(menu.get(0), Err(MenuError::OutOfRange(0, 3)));
        assert_eq!(menu.get(4), Err(MenuError::OutOfRange(4, 3)));
    }

    #[test]
    fn empty_menu() {
        let menu: Menu<()> = std::iter::empty().collect();
        assert_eq!(menu.get(1), Err(MenuError::Empty));
    }

    #[test]
    fn lookup_by_label() {
        let menu = menu();
        assert_eq!(*menu.find_by_label("Tennis").unwrap().id(), "1");
        assert!(menu.find_by_label("squash").is_none());
    }

    #[test]
    fn rendering() {
        assert_eq!(menu().render(), "\t1: Padel\n\t2: Tennis\n\t3: Sulkapallo");
        assert_eq!(title_case("espoo, tapiola"), "Espoo, Tapiola");
        assert_eq!(title_case("järvenpää"), "Järvenpää");
        assert_eq!(title_case("o'neil's 2nd court"), "O'Neil'S 2Nd Court");
    }
}
