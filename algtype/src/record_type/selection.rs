#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    List(Vec<String>),
    Single(String),
}

impl Selection {
    pub fn names(&self) -> &[String] {
        match self {
            Self::List(names) => names,
            Self::Single(name) => std::slice::from_ref(name),
        }
    }
}

impl From<&str> for Selection {
    fn from(name: &str) -> Self {
        Self::Single(name.into())
    }
}

impl From<String> for Selection {
    fn from(name: String) -> Self {
        Self::Single(name)
    }
}

impl From<Vec<String>> for Selection {
    fn from(names: Vec<String>) -> Self {
        Self::List(names)
    }
}

impl From<Vec<&str>> for Selection {
    fn from(names: Vec<&str>) -> Self {
        Self::List(names.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for Selection {
    fn from(names: &[&str]) -> Self {
        Self::List(names.iter().map(|name| name.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Selection {
    fn from(names: [&str; N]) -> Self {
        Self::List(names.into_iter().map(String::from).collect())
    }
}
