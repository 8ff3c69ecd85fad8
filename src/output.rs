use wishlist_meta::ProductMetadata;

pub fn format_metadata(url: &str, meta: &ProductMetadata) -> String {
    let mut out = String::new();

    match &meta.name {
        Some(name) => out.push_str(&format!("## {}\n", name)),
        None => out.push_str("## (no product name)\n"),
    }
    out.push_str(&format!("- **Link:** {}\n", url));
    out.push_str(&format!("- **Retailer:** {}\n", meta.retailer));

    if let Some(price) = meta.price {
        out.push_str(&format!("- **Price:** {}\n", format_price(price)));
    }
    if let Some(image) = &meta.image_url {
        out.push_str(&format!("- **Image:** {}\n", image));
    }
    if let Some(error) = &meta.error {
        out.push_str(&format!("- **Error:** {}\n", error));
    }

    out
}

pub fn format_results(results: &[(String, ProductMetadata)]) -> String {
    results
        .iter()
        .map(|(url, meta)| format_metadata(url, meta))
        .collect::<Vec<_>>()
        .join("\n---\n\n")
}

/// Two decimals with thousands separators, e.g. `1,234.50`.
fn format_price(price: f64) -> String {
    let fixed = format!("{:.2}", price);
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::new();
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}.{}", grouped, frac)
}
