extern crate wasm_bindgen;

use itertools::Itertools;
use serde::Deserialize;
use vnslug::{DefaultSlugIndexStorage, SlugIndexBuilder, SlugOptions};
use wasm_bindgen::prelude::*;

#[inline]
fn err_to_js<D: std::fmt::Display>(prefix: &'static str, displayable: D) -> JsValue {
    JsValue::from(format!("{}: {}", prefix, displayable))
}

#[wasm_bindgen]
pub fn remove_diacritics(input: &str) -> String {
    vnslug::remove_diacritics(input).into_owned()
}

#[wasm_bindgen]
pub fn strip_non_ascii(input: &str) -> String {
    vnslug::strip_non_ascii(input).into_owned()
}

fn parse_options(options: &JsValue) -> Result<SlugOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(SlugOptions::default());
    }
    options
        .into_serde()
        .map_err(|err| err_to_js("failed to parse slug options", err))
}

/// `options` is `undefined`, `null` or `{ separator?: string }`.
#[wasm_bindgen]
pub fn to_slug(input: &str, options: &JsValue) -> Result<String, JsValue> {
    let separator = parse_options(options)?
        .separator()
        .map_err(|err| err_to_js("invalid slug options", err))?;
    Ok(vnslug::to_slug_with(input, &separator))
}

#[derive(Deserialize)]
pub struct BuildData {
    resources: Vec<(u64, String)>,
}

/// Builds a serialized slug index from `{ resources: [[id, title], ...] }`.
#[wasm_bindgen]
pub fn build(val: &JsValue) -> Result<Vec<u8>, JsValue> {
    let data: BuildData = val
        .into_serde()
        .map_err(|err| err_to_js("failed to parse data", err))?;
    let storage = SlugIndexBuilder::default()
        .build(data.resources.iter().map(|(id, title)| (title.as_str(), *id)))
        .map_err(|err| err_to_js("could not build slug index", err))?;
    bincode::serialize(&storage).map_err(|err| err_to_js("could not serialize slug index", err))
}

#[wasm_bindgen]
pub struct Resolver {
    storage: DefaultSlugIndexStorage,
    limit: usize,
}

#[wasm_bindgen]
impl Resolver {
    #[wasm_bindgen(constructor)]
    pub fn new(bytes: Vec<u8>, limit: usize) -> Result<Resolver, JsValue> {
        let storage: DefaultSlugIndexStorage = bincode::deserialize(bytes.as_slice())
            .map_err(|err| err_to_js("could not parse data", err))?;
        // fail early on a corrupt FST rather than on the first query
        storage
            .to_index()
            .map_err(|err| err_to_js("could not load slug index", err))?;
        Ok(Resolver { storage, limit })
    }

    /// Ids whose slug equals the slug of `query`, followed by ids whose slug merely starts with it.
    pub fn resolve(&self, query: &str) -> Result<Vec<u64>, JsValue> {
        let index = self
            .storage
            .to_index()
            .map_err(|err| err_to_js("could not load slug index", err))?;
        let exact = index.exact_match(query).map(|m| m.id);
        let prefix = index.starts_with(query).map(|m| m.id);
        Ok(exact.chain(prefix).unique().take(self.limit).collect())
    }
}
