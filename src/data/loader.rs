use bevy::asset::{AssetLoader, LoadContext, io::Reader, ron};
use std::future::Future;
use thiserror::Error;

use super::schema::ItemCatalog;

#[derive(Default)]
pub struct RonCatalogLoader;

#[derive(Debug, Error)]
pub enum CatalogLoaderError {
    #[error("Could not load asset: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse RON: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("Could not interpret bytes as UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

pub fn parse_catalog(bytes: &[u8]) -> Result<ItemCatalog, CatalogLoaderError> {
    let s = std::str::from_utf8(bytes)?;
    Ok(ron::de::from_str(s)?)
}

impl AssetLoader for RonCatalogLoader {
    type Asset = ItemCatalog;
    type Settings = ();
    type Error = CatalogLoaderError;

    fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext,
    ) -> impl Future<Output = Result<Self::Asset, Self::Error>> + Send {
        async move {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes).await?;
            parse_catalog(&bytes)
        }
    }

    fn extensions(&self) -> &[&str] {
        &["catalog.ron"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_items_and_recipes() {
        let catalog = parse_catalog(
            br#"(
                items: [
                    (id: "wood", name: "Wood"),
                    (id: "sword", name: "Sword", max_stack: 1),
                ],
                recipes: [
                    (id: "plank", input: "wood", input_quantity: 4, output: "plank"),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(catalog.items[0].max_stack, 64);
        assert_eq!(catalog.items[1].max_stack, 1);
        assert_eq!(catalog.recipes[0].output_quantity, 1);
    }

    #[test]
    fn bad_ron_is_an_error() {
        assert!(matches!(
            parse_catalog(b"(items: [(id: 3)])"),
            Err(CatalogLoaderError::Ron(_))
        ));
    }
}
