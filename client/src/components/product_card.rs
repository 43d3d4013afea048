//! Presentational card for one matched product.
//!
//! DESIGN
//! ======
//! The backend rarely sends usable image URLs, so known catalogue ids map to
//! fixed images here. The table wins over the product's own `url`; the `url`
//! is only a fallback for ids the table does not know.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use leptos::prelude::*;

use crate::net::types::Product;

/// Known catalogue ids and their display images.
pub const PRODUCT_IMAGES: &[(&str, &str)] = &[
    ("1", "https://placehold.co/300x300?text=TikTok+Hoodie"),
    ("2", "https://placehold.co/300x300?text=TikTok+Cap"),
    ("3", "https://placehold.co/300x300?text=TikTok+Water+Bottle"),
];

/// Image for `id` from the static table, if the id is known.
pub fn catalogue_image(id: &str) -> Option<&'static str> {
    PRODUCT_IMAGES.iter().find(|(known, _)| *known == id).map(|(_, url)| *url)
}

/// Image to display for `product`: table entry first, then the product's own URL.
pub fn resolve_image_url(product: &Product) -> Option<String> {
    catalogue_image(&product.id)
        .map(str::to_owned)
        .or_else(|| product.url.clone())
}

/// Key for the card at `index`: the product id, or a positional key when the
/// backend sent no id.
pub fn card_key(index: usize, product: &Product) -> String {
    if product.id.is_empty() { format!("#{index}") } else { product.id.clone() }
}

/// A card showing a product's name, image, and price.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let src = resolve_image_url(&product);
    let Product { name, price, .. } = product;
    let alt = name.clone();

    view! {
        <div class="product-card">
            <h4 class="product-card__name">{name}</h4>
            <img class="product-card__image" src=src alt=alt/>
            <p class="product-card__price">{price}</p>
        </div>
    }
}
