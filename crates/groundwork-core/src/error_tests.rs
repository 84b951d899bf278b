use crate::area::{Area, RawKind, RawRow};
use crate::error::{ErrorKind, LevelingError};

#[test]
fn test_messages_name_the_violation() {
    let err = Area::from_rows::<&str>(&[]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Area must contain between 1 and 50 elements, inclusive (got 0)"
    );

    let err = Area::from_rows(&["12", "123"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "All elements of area must be of the same length (row 1: expected 2, found 3)"
    );

    let err = Area::from_rows(&["4012", "TeXt"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Each element of area must contain digits ('0'-'9') only (row 1, column 0: 'T')"
    );

    let err = Area::from_raw(&[RawRow::Other(RawKind::Boolean)]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Each element of area must be a string (row 0 is a boolean)"
    );

    let err = Area::from_rows(&[""]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Elements must contain between 1 and 50 characters, inclusive (row 0 has 0)"
    );
}

#[test]
fn test_kind_and_row() {
    let err = LevelingError::InvalidSize { rows: 56 };
    assert_eq!(err.kind(), ErrorKind::InvalidSize);
    assert_eq!(err.row(), None);

    let err = LevelingError::InvalidElementSize { row: 3, len: 51 };
    assert_eq!(err.kind(), ErrorKind::InvalidElementSize);
    assert_eq!(err.row(), Some(3));
}

#[test]
fn test_kind_names() {
    assert_eq!(ErrorKind::InvalidSize.as_str(), "invalid_size");
    assert_eq!(ErrorKind::InvalidType.to_string(), "invalid_type");
    assert_eq!(ErrorKind::InconsistentSize.as_str(), "inconsistent_size");
}
