//! Category taxonomy.

/// Sentinel category id meaning "every product".
pub const CATEGORY_ALL: &str = "all";

/// A category pill shown by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
}

/// The storefront's fixed categories, in display order.
pub const CATEGORIES: &[Category] = &[
    Category { id: CATEGORY_ALL, label: "✨ Todo" },
    Category { id: "figuras-3d", label: "Figuras 3D" },
    Category { id: "tablas-tableros", label: "Tablas & Tableros" },
    Category { id: "velas-rituales", label: "Velas & Rituales" },
    Category { id: "llaveros-detalles", label: "Llaveros & Detalles" },
    Category { id: "decoracion", label: "Decoración esotérica" },
];
