use std::{fmt::Display, str::FromStr};

use super::error::CollectionError;

/// The searchable columns of a [`super::Record`].
///
/// [`Column::Id`] goes through the primary key index. Every other column is
/// answered by a linear scan over the storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Value,
    Name,
    Description,
}

impl Column {
    pub const ALL: [Column; 4] = [Column::Id, Column::Value, Column::Name, Column::Description];
}

impl Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let column = match self {
            Column::Id => "id",
            Column::Value => "value",
            Column::Name => "name",
            Column::Description => "description",
        };
        write!(f, "{}", column)
    }
}

impl FromStr for Column {
    type Err = CollectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(Column::Id),
            "value" => Ok(Column::Value),
            "name" => Ok(Column::Name),
            "description" | "desc" => Ok(Column::Description),
            other => Err(CollectionError::UnknownColumn(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_parses_case_insensitively() {
        assert_eq!("ID".parse::<Column>(), Ok(Column::Id));
        assert_eq!("Name".parse::<Column>(), Ok(Column::Name));
        assert_eq!("desc".parse::<Column>(), Ok(Column::Description));
    }

    #[test]
    fn column_rejects_unknown_names() {
        assert_eq!(
            "age".parse::<Column>(),
            Err(CollectionError::UnknownColumn("age".to_string()))
        );
    }

    #[test]
    fn column_display_parses_back() {
        for column in Column::ALL {
            assert_eq!(column.to_string().parse::<Column>(), Ok(column));
        }
    }
}
