/// A freshly created resource and the path it can be fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created<T> {
    pub resource: T,
    pub location: String,
}
