//! Basic page generation example.
//!
//! Run with: `cargo run -p site-leptos --example basic_page`

use site_leptos::{content, render_page};

fn main() {
    let page = content::hotels_restaurants();

    let html = render_page(&page);

    let output_path = "hotels-and-restaurants.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
