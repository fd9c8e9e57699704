use std::{fmt, str::FromStr};

/// The categories offered by the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceCategory {
    #[default]
    Restaurant,
    Cafe,
    Bar,
    Park,
    ShoppingMall,
    MovieTheater,
    Library,
    Gym,
}

impl PlaceCategory {
    pub const ALL: [PlaceCategory; 8] = [
        PlaceCategory::Restaurant,
        PlaceCategory::Cafe,
        PlaceCategory::Bar,
        PlaceCategory::Park,
        PlaceCategory::ShoppingMall,
        PlaceCategory::MovieTheater,
        PlaceCategory::Library,
        PlaceCategory::Gym,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PlaceCategory::Restaurant => "restaurant",
            PlaceCategory::Cafe => "cafe",
            PlaceCategory::Bar => "bar",
            PlaceCategory::Park => "park",
            PlaceCategory::ShoppingMall => "shopping_mall",
            PlaceCategory::MovieTheater => "movie_theater",
            PlaceCategory::Library => "library",
            PlaceCategory::Gym => "gym",
        }
    }
}

impl fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlaceCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = PlaceCategory::ALL.iter().map(|c| c.as_str()).collect();
                format!("unknown place type {:?}, expected one of {}", s, names.join(", "))
            })
    }
}
