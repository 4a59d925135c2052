use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One button on the wishlist screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    CreateWishlist,
    UpdateWishlist,
    RetrieveWishlist,
    SearchWishlists,
    DeleteWishlist,
    EmptyWishlist,
    CreateItem,
    RetrieveItem,
    UpdateItem,
    SearchItems,
    DeleteItem,
    ClearForm,
}

impl Action {
    pub const ALL: [Action; 12] = [
        Action::CreateWishlist,
        Action::UpdateWishlist,
        Action::RetrieveWishlist,
        Action::SearchWishlists,
        Action::DeleteWishlist,
        Action::EmptyWishlist,
        Action::CreateItem,
        Action::RetrieveItem,
        Action::UpdateItem,
        Action::SearchItems,
        Action::DeleteItem,
        Action::ClearForm,
    ];

    /// Short name, also the button id without its `-btn` suffix.
    pub fn name(&self) -> &'static str {
        match self {
            Action::CreateWishlist => "create",
            Action::UpdateWishlist => "update",
            Action::RetrieveWishlist => "retrieve",
            Action::SearchWishlists => "search",
            Action::DeleteWishlist => "delete",
            Action::EmptyWishlist => "empty",
            Action::CreateItem => "create-item",
            Action::RetrieveItem => "retrieve-item",
            Action::UpdateItem => "update-item",
            Action::SearchItems => "search-item",
            Action::DeleteItem => "delete-item",
            Action::ClearForm => "clear",
        }
    }

    pub fn button_id(&self) -> String {
        format!("{}-btn", self.name())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown action '{0}'")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let name = name.strip_suffix("-btn").unwrap_or(&name);
        Action::ALL
            .into_iter()
            .find(|a| a.name() == name)
            .ok_or_else(|| UnknownAction(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_button_ids() {
        assert_eq!("search-item".parse::<Action>(), Ok(Action::SearchItems));
        assert_eq!("Empty-btn".parse::<Action>(), Ok(Action::EmptyWishlist));
        assert!("explode".parse::<Action>().is_err());
    }

    #[test]
    fn button_ids_are_unique() {
        let mut ids: Vec<String> = Action::ALL.iter().map(Action::button_id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Action::ALL.len());
    }
}
