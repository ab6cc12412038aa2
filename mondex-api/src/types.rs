use serde::{Deserialize, Serialize};

/// One page of the catalog listing. `results` are ordering-significant:
/// position within the overall listing is the catalog rank.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingPage {
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<PokemonStub>,
}

impl ListingPage {
    /// Whether the remote catalog has a further page after this one.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Lightweight listing reference, not yet resolved to a full [`Pokemon`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonStub {
    pub name: String,
    pub url: String,
}

/// Full catalog record for one pokemon. Immutable once fetched; the
/// collection persists independent copies of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: SpriteSet,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
}

impl Pokemon {
    /// Resolve the best display image: official artwork first, then the
    /// dream-world rendition, then the default thumbnail sprite. All three
    /// absent means "no image", not an error.
    pub fn image_url(&self) -> Option<&str> {
        self.sprites
            .other
            .official_artwork
            .front_default
            .as_deref()
            .or(self.sprites.other.dream_world.front_default.as_deref())
            .or(self.sprites.front_default.as_deref())
    }

    /// Base value of the named stat (e.g. "hp", "attack", "defense").
    /// Returns `None` when the record carries no such stat.
    pub fn base_stat(&self, name: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|s| s.stat.name == name)
            .map(|s| s.base_stat)
    }

    /// Type names in slot order.
    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.kind.name.as_str()).collect()
    }
}

/// Sprite references as nested by the remote API. Sources are resolved by
/// priority in [`Pokemon::image_url`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpriteSet {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: SpriteVariants,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpriteVariants {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: SpriteSlot,
    #[serde(default)]
    pub dream_world: SpriteSlot,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpriteSlot {
    #[serde(default)]
    pub front_default: Option<String>,
}

/// A typed slot entry (`{ slot, type: { name, url } }` on the wire).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedRef,
}

/// A named base stat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedRef,
}

/// Name/url pair used for nested references throughout the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> NamedRef {
        NamedRef {
            name: name.to_string(),
            url: String::new(),
        }
    }

    fn bare(id: u32, name: &str) -> Pokemon {
        Pokemon {
            id,
            name: name.to_string(),
            sprites: SpriteSet::default(),
            types: Vec::new(),
            stats: Vec::new(),
        }
    }

    #[test]
    fn image_prefers_official_artwork() {
        let mut p = bare(1, "bulbasaur");
        p.sprites.front_default = Some("thumb.png".into());
        p.sprites.other.dream_world.front_default = Some("dream.svg".into());
        p.sprites.other.official_artwork.front_default = Some("art.png".into());
        assert_eq!(p.image_url(), Some("art.png"));
    }

    #[test]
    fn image_falls_back_to_dream_world_then_thumbnail() {
        let mut p = bare(1, "bulbasaur");
        p.sprites.front_default = Some("thumb.png".into());
        p.sprites.other.dream_world.front_default = Some("dream.svg".into());
        assert_eq!(p.image_url(), Some("dream.svg"));

        p.sprites.other.dream_world.front_default = None;
        assert_eq!(p.image_url(), Some("thumb.png"));
    }

    #[test]
    fn image_absent_everywhere_is_none() {
        let p = bare(1, "bulbasaur");
        assert_eq!(p.image_url(), None);
    }

    #[test]
    fn base_stat_lookup() {
        let mut p = bare(25, "pikachu");
        p.stats = vec![
            StatEntry {
                base_stat: 35,
                stat: named("hp"),
            },
            StatEntry {
                base_stat: 55,
                stat: named("attack"),
            },
        ];
        assert_eq!(p.base_stat("hp"), Some(35));
        assert_eq!(p.base_stat("attack"), Some(55));
        assert_eq!(p.base_stat("speed"), None);
    }

    #[test]
    fn listing_page_has_next() {
        let page = ListingPage {
            count: 1302,
            next: Some("https://example/pokemon?offset=6".into()),
            previous: None,
            results: Vec::new(),
        };
        assert!(page.has_next());

        let last = ListingPage {
            count: 1302,
            next: None,
            previous: Some("https://example/pokemon?offset=1290".into()),
            results: Vec::new(),
        };
        assert!(!last.has_next());
    }
}
