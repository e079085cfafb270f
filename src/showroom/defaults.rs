//! Built-in catalog used when nothing has been saved yet.

use crate::model::{Category, Product};

fn product(
    id: &str,
    code: &str,
    category: Category,
    title: &str,
    price: u64,
    image_name: &str,
    description: &str,
) -> Product {
    Product {
        id: id.to_string(),
        code: code.to_string(),
        image_folder: category.as_str().to_string(),
        category,
        title: title.to_string(),
        description: description.to_string(),
        price,
        image_name: image_name.to_string(),
    }
}

/// The default dataset, in display order.
pub fn products() -> Vec<Product> {
    vec![
        product(
            "h1",
            "JO-H-001",
            Category::home(),
            "Luxury Fabric Sofa",
            185000,
            "fabric-sofa.jpeg",
            "A plush, high-comfort sofa designed for modern living rooms. Features premium breathable fabric and high-density foam.",
        ),
        product(
            "h2",
            "JO-H-002",
            Category::home(),
            "Elegant Dining Set",
            145000,
            "dining-set.jpeg",
            "Hand-crafted wooden dining table with four minimalist chairs. Perfect for family gatherings.",
        ),
        product(
            "h3",
            "JO-H-003",
            Category::home(),
            "Minimalist Walnut Coffee Table",
            35000,
            "coffee-table.jpeg",
            "Sleek walnut wood coffee table with a minimalist metal base.",
        ),
        product(
            "h4",
            "JO-H-004",
            Category::home(),
            "Velvet Lounge Chair",
            65000,
            "lounge-chair.jpeg",
            "Ergonomic lounge chair upholstered in premium velvet.",
        ),
        product(
            "o1",
            "JO-O-001",
            Category::office(),
            "Pro Executive Desk",
            98000,
            "executive-desk.jpeg",
            "Large executive desk with cable management and high-quality finish.",
        ),
        product(
            "o2",
            "JO-O-002",
            Category::office(),
            "Ergonomic Office Chair",
            42000,
            "office-chair.jpeg",
            "Fully adjustable office chair with lumbar support and breathable mesh.",
        ),
        product(
            "h5",
            "JO-H-005",
            Category::home(),
            "Minimalist Bed Frame",
            120000,
            "bed-frame.jpeg",
            "A sleek, modern bed frame crafted from solid oak wood.",
        ),
        product(
            "h6",
            "JO-H-006",
            Category::home(),
            "Contemporary Sideboard",
            75000,
            "sideboard.jpeg",
            "Stylish sideboard with ample storage space and soft-close doors.",
        ),
        product(
            "o3",
            "JO-O-003",
            Category::office(),
            "Compact Workstation",
            52000,
            "workstation.jpeg",
            "Space-saving workstation designed for home offices.",
        ),
    ]
}
