use serde::{Deserialize, Serialize};

/// Attributes shared by every catalogue entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    pub year: i32,
}

impl Item {
    pub fn new(title: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            year,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(flatten)]
    pub item: Item,
    pub author: String,
    /// Copies sold, in millions.
    pub sales: u32,
    pub pages: u32,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        year: i32,
        author: impl Into<String>,
        sales: u32,
        pages: u32,
    ) -> Self {
        Self {
            item: Item::new(title, year),
            author: author.into(),
            sales,
            pages,
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Sex {
    pub fn code(self) -> char {
        match self {
            Sex::Male => 'M',
            Sex::Female => 'F',
            Sex::Unknown => 'x',
        }
    }
}

impl TryFrom<char> for Sex {
    type Error = String;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code {
            'M' | 'm' => Ok(Sex::Male),
            'F' | 'f' => Ok(Sex::Female),
            'x' | 'X' => Ok(Sex::Unknown),
            other => Err(format!("unknown sex code {other:?}")),
        }
    }
}

impl From<Sex> for char {
    fn from(sex: Sex) -> char {
        sex.code()
    }
}

/// An actor. `name` is the identity key: the catalogue keeps one record per name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    pub birth_year: i32,
    pub sex: Sex,
}

impl Actor {
    pub fn new(name: impl Into<String>, birth_year: i32, sex: Sex) -> Self {
        Self {
            name: name.into(),
            birth_year,
            sex,
        }
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {} {}", self.name, self.birth_year, self.sex.code())
    }
}
