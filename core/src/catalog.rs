/// Upper bound for a lowercased name plus the ".png" suffix.
pub const KEY_CAPACITY: usize = 64;

const KEY_SUFFIX: &str = ".png";

pub type AssetKey = heapless::String<KEY_CAPACITY>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    TooFewNames,
    NameTooLong,
}

type Result<T> = core::result::Result<T, Error>;

/// Ordered list of selectable names. Index 0 is reserved as the
/// "no selection" sentinel and never resolves to an asset.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    names: &'static [&'static str],
}

impl Catalog {
    pub fn new(names: &'static [&'static str]) -> Result<Self> {
        if names.len() < 2 {
            return Err(Error::TooFewNames);
        }
        if names[1..]
            .iter()
            .any(|name| name.len() + KEY_SUFFIX.len() > KEY_CAPACITY)
        {
            return Err(Error::NameTooLong);
        }
        Ok(Catalog { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Count of real entries, excluding the sentinel.
    pub fn entry_count(&self) -> usize {
        self.names.len() - 1
    }

    pub fn name(&self, index: usize) -> Option<&'static str> {
        self.names.get(index).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.names.iter().copied()
    }

    /// Asset key for a real entry: the lowercased name with ".png"
    /// appended. The sentinel has no key.
    pub fn asset_key(&self, index: usize) -> Option<AssetKey> {
        if index == 0 {
            return None;
        }
        let name = self.name(index)?;
        let mut key = AssetKey::new();
        for c in name.chars() {
            key.push(c.to_ascii_lowercase()).ok()?;
        }
        key.push_str(KEY_SUFFIX).ok()?;
        Some(key)
    }
}
