use std::collections::HashSet;
use std::fmt;

use pixconn_core::Coord;

use crate::error::PathError;

/// An ordered walk of distinct cells, first element the start and last the
/// end, each consecutive pair adjacent under the mode it was searched with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Coord>", into = "Vec<Coord>")
)]
pub struct Path(Vec<Coord>);

impl Path {
    /// Must be non-empty.
    pub(crate) fn from_coords(coords: Vec<Coord>) -> Self {
        debug_assert!(!coords.is_empty());
        Self(coords)
    }

    /// Number of cells, both endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: a path holds at least its start cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn start(&self) -> Coord {
        self.0[0]
    }

    pub fn end(&self) -> Coord {
        self.0[self.0.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Coord] {
        &self.0
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.0.contains(&c)
    }

    /// The cells as 1-based `(row, col)` pairs.
    pub fn to_one_based(&self) -> Vec<(i32, i32)> {
        self.0.iter().map(|c| c.to_one_based()).collect()
    }

    pub fn into_vec(self) -> Vec<Coord> {
        self.0
    }
}

impl TryFrom<Vec<Coord>> for Path {
    type Error = PathError;

    /// Rejects an empty list and any cell listed twice. Adjacency is not
    /// checked, since it depends on the raster and mode.
    fn try_from(coords: Vec<Coord>) -> Result<Self, PathError> {
        if coords.is_empty() {
            return Err(PathError::EmptyPath);
        }
        let mut seen = HashSet::with_capacity(coords.len());
        if let Some(&c) = coords.iter().find(|&&c| !seen.insert(c)) {
            return Err(PathError::RepeatedCell(c));
        }
        Ok(Self(coords))
    }
}

impl From<Path> for Vec<Coord> {
    fn from(p: Path) -> Self {
        p.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    /// 0-based, e.g. `[(0, 0), (1, 1)]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}

/// Outcome of a shortest-path search. `NotFound` is a valid answer, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathReport {
    Found(Path),
    NotFound,
}

impl PathReport {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(p) => Some(p),
            Self::NotFound => None,
        }
    }

    /// Cell count of the path, endpoints included.
    pub fn length(&self) -> Option<usize> {
        self.path().map(Path::len)
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(p) => Some(p),
            Self::NotFound => None,
        }
    }
}

impl From<Option<Path>> for PathReport {
    fn from(p: Option<Path>) -> Self {
        p.map_or(Self::NotFound, Self::Found)
    }
}

impl fmt::Display for PathReport {
    /// Two lines with 1-based coordinates, or `Path Not Found`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(path) => {
                write!(f, "Path Found: [")?;
                for (i, (r, c)) in path.to_one_based().into_iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "({r}, {c})")?;
                }
                writeln!(f, "]")?;
                write!(f, "Pixel Count: {}", path.len())
            }
            Self::NotFound => f.write_str("Path Not Found"),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn report_round_trip() {
        let report = PathReport::Found(Path::from_coords(vec![
            Coord::new(0, 0),
            Coord::new(1, 0),
        ]));
        let json = serde_json::to_string(&report).unwrap();
        let back: PathReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);

        let json = serde_json::to_string(&PathReport::NotFound).unwrap();
        assert_eq!(json, "\"NotFound\"");
    }

    #[test]
    fn path_is_a_plain_list() {
        let path = Path::from_coords(vec![Coord::new(2, 3)]);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"[{"row":2,"col":3}]"#);
    }

    #[test]
    fn invalid_paths_fail_to_deserialize() {
        assert!(serde_json::from_str::<Path>("[]").is_err());
        assert!(serde_json::from_str::<PathReport>(r#"{"Found":[]}"#).is_err());
        let repeated = r#"{"Found":[{"row":0,"col":0},{"row":0,"col":0}]}"#;
        let err = serde_json::from_str::<PathReport>(repeated).unwrap_err();
        assert!(err.to_string().contains("more than once"), "{err}");
    }
}
