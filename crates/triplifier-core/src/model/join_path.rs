use super::Join;

/// A sequence of one or two joins connecting two tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinPath<'a> {
    Direct(&'a Join),

    /// Through one intermediate table, in traversal order.
    TwoHop(&'a Join, &'a Join),
}

impl<'a> JoinPath<'a> {
    pub fn joins(&self) -> impl Iterator<Item = &'a Join> {
        let (first, second) = match *self {
            JoinPath::Direct(join) => (join, None),
            JoinPath::TwoHop(first, second) => (first, Some(second)),
        };
        std::iter::once(first).chain(second)
    }

    pub fn len(&self) -> usize {
        match self {
            JoinPath::Direct(_) => 1,
            JoinPath::TwoHop(..) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Find the joins connecting tables `a` and `b`.
///
/// A single join whose endpoints are `{a, b}` is preferred. Failing that, every
/// join touching `a` is tried as a first hop, and the path is completed by a
/// single join from that join's other endpoint to `b`.
///
/// Ties are broken by iteration order: direct candidates in `joins` order,
/// then first hops in `joins` order, each completed by the first matching
/// second hop. Callers that care which of several equivalent paths is chosen
/// must order `joins` accordingly.
pub fn find_path<'a, I>(a: &str, b: &str, joins: I) -> Option<JoinPath<'a>>
where
    I: IntoIterator<Item = &'a Join>,
    I::IntoIter: Clone,
{
    let joins = joins.into_iter();

    if let Some(join) = find_direct(a, b, joins.clone()) {
        return Some(JoinPath::Direct(join));
    }

    joins.clone().find_map(|first| {
        let intermediate = first.other_end(a)?;
        let second = find_direct(intermediate, b, joins.clone())?;
        Some(JoinPath::TwoHop(first, second))
    })
}

fn find_direct<'a>(
    a: &str,
    b: &str,
    mut joins: impl Iterator<Item = &'a Join>,
) -> Option<&'a Join> {
    joins.find(|join| join.connects(a, b))
}
