use log::debug;

use crate::catalog::{AssetKey, Catalog};

pub const ORIGINAL_LABEL: &str = "Original Image";
pub const COMPRESSED_LABEL: &str = "Compressed Image";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Index outside the catalog. A correctly bound selector never
    /// produces this.
    InvalidIndex(usize),
}

type Result<T> = core::result::Result<T, Error>;

/// What the screen renders for one selection: the two asset slots and
/// the heading above each. Derived data only, recomputed per event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPair {
    pub primary: Option<AssetKey>,
    pub secondary: Option<AssetKey>,
    pub primary_label: &'static str,
    pub secondary_label: &'static str,
}

impl DisplayPair {
    fn empty() -> Self {
        DisplayPair {
            primary: None,
            secondary: None,
            primary_label: ORIGINAL_LABEL,
            secondary_label: COMPRESSED_LABEL,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none()
    }
}

/// Pure mapping from a selector index to the rendered pair.
///
/// The sentinel clears both slots and restores the default headings. A
/// real entry shows itself next to its cyclic successor: the rotation
/// wraps past the last real entry back to the first and skips the
/// sentinel, so a catalog with a single real entry pairs it with itself.
pub fn pair_for(catalog: &Catalog, index: usize) -> Result<DisplayPair> {
    if index >= catalog.len() {
        return Err(Error::InvalidIndex(index));
    }
    if index == 0 {
        return Ok(DisplayPair::empty());
    }
    let n = catalog.entry_count();
    let secondary = 1 + ((index + 1) % n);
    debug!("selection {index} pairs with {secondary}");
    Ok(DisplayPair {
        primary: catalog.asset_key(index),
        secondary: catalog.asset_key(secondary),
        primary_label: "",
        secondary_label: "",
    })
}

/// Remembers the current selection and derives the pair for it. The
/// catalog is fixed for the controller's lifetime; the selection starts
/// at the sentinel and moves only through `select` and `reset`.
pub struct SelectionController {
    catalog: Catalog,
    selected: usize,
}

impl SelectionController {
    pub fn new(catalog: Catalog) -> Self {
        SelectionController {
            catalog,
            selected: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Handle a selection event. Out-of-range indices are rejected, not
    /// clamped, and leave the current selection untouched.
    pub fn select(&mut self, index: usize) -> Result<DisplayPair> {
        let pair = pair_for(&self.catalog, index)?;
        self.selected = index;
        Ok(pair)
    }

    /// Back to the sentinel.
    pub fn reset(&mut self) -> DisplayPair {
        self.selected = 0;
        DisplayPair::empty()
    }

    /// Re-derive the pair for the current selection.
    pub fn current(&self) -> DisplayPair {
        pair_for(&self.catalog, self.selected).unwrap_or_else(|_| DisplayPair::empty())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(&["Select Image", "Girl", "Bus", "Paris"]).unwrap()
    }

    #[test]
    fn pairs_follow_the_rotation() {
        let mut controller = SelectionController::new(catalog());

        let pair = controller.select(1).unwrap();
        assert_eq!(pair.primary.as_deref(), Some("girl.png"));
        assert_eq!(pair.secondary.as_deref(), Some("paris.png"));

        let pair = controller.select(2).unwrap();
        assert_eq!(pair.primary.as_deref(), Some("bus.png"));
        assert_eq!(pair.secondary.as_deref(), Some("girl.png"));

        let pair = controller.select(3).unwrap();
        assert_eq!(pair.primary.as_deref(), Some("paris.png"));
        assert_eq!(pair.secondary.as_deref(), Some("bus.png"));
    }

    #[test]
    fn paired_state_blanks_the_headings() {
        let mut controller = SelectionController::new(catalog());
        let pair = controller.select(2).unwrap();
        assert_eq!(pair.primary_label, "");
        assert_eq!(pair.secondary_label, "");
    }

    #[test]
    fn sentinel_clears_regardless_of_history() {
        let mut controller = SelectionController::new(catalog());
        controller.select(3).unwrap();

        let pair = controller.select(0).unwrap();
        assert!(pair.is_empty());
        assert_eq!(pair.primary_label, ORIGINAL_LABEL);
        assert_eq!(pair.secondary_label, COMPRESSED_LABEL);
        assert_eq!(controller.selected(), 0);
    }

    #[test]
    fn reset_matches_the_sentinel_selection() {
        let mut controller = SelectionController::new(catalog());
        controller.select(1).unwrap();

        let via_select = pair_for(controller.catalog(), 0).unwrap();
        assert_eq!(controller.reset(), via_select);
    }

    #[test]
    fn selection_is_a_pure_function_of_the_index() {
        let mut controller = SelectionController::new(catalog());
        let first = controller.select(2).unwrap();
        let second = controller.select(2).unwrap();
        assert_eq!(first, second);
        assert_eq!(controller.current(), first);
    }

    #[test]
    fn secondary_never_lands_on_the_sentinel() {
        let catalog = catalog();
        for index in 1..catalog.len() {
            let pair = pair_for(&catalog, index).unwrap();
            let key = pair.secondary.unwrap();
            assert!(
                (1..catalog.len()).any(|j| catalog.asset_key(j).as_deref() == Some(key.as_str()))
            );
        }
    }

    #[test]
    fn single_entry_pairs_with_itself() {
        let catalog = Catalog::new(&["Select Image", "Girl"]).unwrap();
        let pair = pair_for(&catalog, 1).unwrap();
        assert_eq!(pair.primary.as_deref(), Some("girl.png"));
        assert_eq!(pair.secondary.as_deref(), Some("girl.png"));
    }

    #[test]
    fn out_of_range_is_rejected_not_clamped() {
        let mut controller = SelectionController::new(catalog());
        controller.select(2).unwrap();

        assert_eq!(controller.select(4).unwrap_err(), Error::InvalidIndex(4));
        assert_eq!(controller.selected(), 2);
    }
}
