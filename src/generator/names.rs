//! Word lists for generated names.

pub const FILLINGS: &[&str] = &[
    "Strawberry",
    "Chocolate",
    "Blueberry",
    "Raspberry",
    "Vanilla",
];

pub const PASTRY_TYPES: &[&str] = &[
    "Cake",
    "Pastry",
    "Tart",
    "Muffin",
    "Biscuit",
    "Bread",
    "Bagel",
    "Bun",
    "Brownie",
    "Cookie",
    "Cracker",
    "Cheese Cake",
];

pub const FIRST_NAMES: &[&str] = &[
    "Ada", "Amanda", "Bruno", "Clara", "Dominique", "Elaine", "Felix", "Greta", "Hugo", "Ines",
    "Jonas", "Kerry", "Lionel", "Marta", "Nadia", "Oskar", "Priya", "Rafael", "Sylvia", "Tomas",
];

pub const LAST_NAMES: &[&str] = &[
    "Andersen", "Baker", "Castillo", "Dubois", "Eriksen", "Fischer", "Garcia", "Holm", "Ivanova",
    "Jensen", "Kowalski", "Lindqvist", "Moreau", "Novak", "Okafor", "Petrov", "Quinn", "Rossi",
    "Silva", "Tanaka",
];

pub const ITEM_COMMENTS: &[&str] = &["Lactose free", "Gluten free"];

pub const VIP_DETAILS: &str = "Very important customer";

pub const PICKUP_LOCATIONS: &[&str] = &["Store", "Bakery"];
