use core::cell::{OnceCell, RefCell};

use crate::codec::{ParameterCodec, UrlCodec};
use crate::compat::{Rc, String, ToString, Vec};
use crate::error::{ParamsError, Result};
use crate::options::ParamsOptions;
use crate::param_map::ParamMap;
use crate::parser::parse_query;
use crate::update::Update;
use crate::value::ParamValue;

/// Immutable query parameters (`application/x-www-form-urlencoded` body).
///
/// Every mutation returns a new store and leaves the receiver untouched.
/// Mutations are recorded, not applied: a derived store points at one
/// ancestor plus a list of pending updates, and the first read replays them
/// once and caches the result. Chaining N mutations keeps the store one hop
/// away from a concrete map with N pending updates.
///
/// Cloning is cheap and shares the same underlying snapshot.
pub struct QueryParams<C = UrlCodec> {
    node: Rc<Node<C>>,
}

/// Mutations not yet applied on top of an ancestor's map.
struct Deferred<C> {
    ancestor: Rc<Node<C>>,
    updates: Vec<Update>,
}

struct Node<C> {
    codec: Rc<C>,
    map: OnceCell<ParamMap>,
    deferred: RefCell<Option<Deferred<C>>>,
    #[cfg(test)]
    replays: core::cell::Cell<usize>,
}

impl<C> Node<C> {
    fn new(codec: Rc<C>, map: OnceCell<ParamMap>, deferred: Option<Deferred<C>>) -> Self {
        Self {
            codec,
            map,
            deferred: RefCell::new(deferred),
            #[cfg(test)]
            replays: core::cell::Cell::new(0),
        }
    }

    fn materialized(codec: Rc<C>, map: ParamMap) -> Self {
        Self::new(codec, OnceCell::from(map), None)
    }

    fn uninitialized(codec: Rc<C>) -> Self {
        Self::new(codec, OnceCell::new(), None)
    }

    /// Resolve the ancestor and pending updates into a concrete map.
    /// Later calls return the cached map.
    fn materialize(&self) -> &ParamMap {
        if let Some(map) = self.map.get() {
            return map;
        }

        let deferred = self.deferred.borrow_mut().take();
        let mut map = ParamMap::new();
        if let Some(Deferred { ancestor, updates }) = deferred {
            map.clone_from(ancestor.materialize());
            for update in updates {
                update.apply(&mut map);
            }
        }

        #[cfg(test)]
        self.replays.set(self.replays.get() + 1);

        self.map.get_or_init(|| map)
    }
}

impl QueryParams<UrlCodec> {
    /// Create an empty store with the default codec.
    pub fn new() -> Self {
        Self::with_codec(UrlCodec)
    }

    /// Parse from a query string (with or without leading `?`)
    pub fn parse(raw: &str) -> Self {
        Self::parse_with_codec(raw, UrlCodec)
    }

    /// Build from `(name, value)` entries, where each value is a scalar or a
    /// sequence. A repeated name replaces the earlier entry.
    ///
    /// ```
    /// use qparams::QueryParams;
    ///
    /// let params = QueryParams::from_object([("a", vec![1, 2])]);
    /// assert_eq!(params.to_string(), "a=1&a=2");
    /// ```
    pub fn from_object<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        Self::from_object_with_codec(entries, UrlCodec)
    }
}

impl Default for QueryParams<UrlCodec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ParameterCodec> QueryParams<C> {
    /// Create an empty store that will serialize with `codec`.
    pub fn with_codec(codec: C) -> Self {
        Self::from_node(Node::uninitialized(Rc::new(codec)))
    }

    pub fn parse_with_codec(raw: &str, codec: C) -> Self {
        let map = parse_query(raw, &codec);
        Self::from_node(Node::materialized(Rc::new(codec), map))
    }

    pub fn from_object_with_codec<I, K, V>(entries: I, codec: C) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        let mut map = ParamMap::new();
        for (key, value) in entries {
            map.insert(key.into(), value.into().into_values());
        }
        Self::from_node(Node::materialized(Rc::new(codec), map))
    }

    /// Build a store from [`ParamsOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::MutuallyExclusiveSources`] when both a query
    /// string and an object source are set.
    pub fn with_options(options: ParamsOptions<C>) -> Result<Self> {
        let ParamsOptions {
            query,
            object,
            codec,
        } = options;
        match (query, object) {
            (Some(_), Some(_)) => Err(ParamsError::MutuallyExclusiveSources),
            (Some(raw), None) => Ok(Self::parse_with_codec(&raw, codec)),
            (None, Some(entries)) => Ok(Self::from_object_with_codec(entries, codec)),
            (None, None) => Ok(Self::with_codec(codec)),
        }
    }

    fn from_node(node: Node<C>) -> Self {
        Self {
            node: Rc::new(node),
        }
    }

    /// The codec this store parses and serializes with.
    pub fn codec(&self) -> &C {
        &self.node.codec
    }

    /// Derive a new store carrying the receiver's pending updates plus
    /// `extra`. The ancestor is the receiver's ancestor while the receiver is
    /// still deferred, so chains never grow past one hop.
    fn derive(&self, extra: impl IntoIterator<Item = Update>) -> Self {
        let (ancestor, mut updates) = match self.node.deferred.borrow().as_ref() {
            Some(deferred) => (Rc::clone(&deferred.ancestor), deferred.updates.clone()),
            None => (Rc::clone(&self.node), Vec::new()),
        };
        updates.extend(extra);

        Self::from_node(Node::new(
            Rc::clone(&self.node.codec),
            OnceCell::new(),
            Some(Deferred { ancestor, updates }),
        ))
    }

    /// Return a new store with `value` appended to `param`.
    #[must_use]
    pub fn append(&self, param: &str, value: impl core::fmt::Display) -> Self {
        self.derive([Update::append(param.to_string(), value.to_string())])
    }

    /// Append every `(param, value)` entry in order; a sequence value appends
    /// one update per element.
    #[must_use]
    pub fn append_all<I, K, V>(&self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        let mut updates = Vec::new();
        for (param, value) in entries {
            let param = param.into();
            for value in value.into().into_values() {
                updates.push(Update::append(param.clone(), value));
            }
        }
        self.derive(updates)
    }

    /// Return a new store with `value` recorded as a set of `param`.
    ///
    /// Pending sets are applied like appends: values already present for
    /// `param` are kept, so `set("x", 1).set("x", 2)` yields `["1", "2"]`.
    #[must_use]
    pub fn set(&self, param: &str, value: impl core::fmt::Display) -> Self {
        self.derive([Update::set(param.to_string(), value.to_string())])
    }

    /// Delete pairs with the given key.
    /// If `value` is provided, only its first occurrence is removed.
    /// Otherwise, the key is removed entirely.
    #[must_use]
    pub fn delete(&self, param: &str, value: Option<&str>) -> Self {
        self.derive([Update::delete(
            param.to_string(),
            value.map(ToString::to_string),
        )])
    }

    /// Check if a key exists.
    pub fn has(&self, param: &str) -> bool {
        self.node.materialize().contains_key(param)
    }

    /// Get the first value for a key.
    pub fn get(&self, param: &str) -> Option<&str> {
        self.node
            .materialize()
            .get(param)
            .and_then(<[String]>::first)
            .map(String::as_str)
    }

    /// Get all values for a key, or `None` if the key is absent.
    pub fn get_all(&self, param: &str) -> Option<&[String]> {
        self.node.materialize().get(param)
    }

    /// Parameter names in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.node.materialize().keys()
    }

    /// Iterate over all key-value pairs, grouped by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.node
            .materialize()
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |value| (key, value.as_str())))
    }

    /// Number of distinct parameter names.
    pub fn len(&self) -> usize {
        self.node.materialize().len()
    }

    pub fn is_empty(&self) -> bool {
        self.node.materialize().is_empty()
    }

    /// Convert to query string without leading `?`.
    #[allow(clippy::inherent_to_string_shadow_display)]
    pub fn to_string(&self) -> String {
        let codec = &*self.node.codec;
        let mut result = String::new();

        for (key, values) in self.node.materialize().iter() {
            if values.is_empty() {
                continue;
            }
            let encoded_key = codec.encode_key(key);
            for value in values {
                if !result.is_empty() {
                    result.push('&');
                }
                result.push_str(&encoded_key);
                result.push('=');
                result.push_str(&codec.encode_value(value));
            }
        }
        result
    }

    /// Convert to query string with leading `?`, or empty string if no pairs.
    pub fn serialize(&self) -> String {
        let query = self.to_string();
        if query.is_empty() {
            return query;
        }
        let mut result = String::with_capacity(query.len() + 1);
        result.push('?');
        result.push_str(&query);
        result
    }
}

impl<C> Clone for QueryParams<C> {
    fn clone(&self) -> Self {
        Self {
            node: Rc::clone(&self.node),
        }
    }
}

impl<C: ParameterCodec> PartialEq for QueryParams<C> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
            || self.node.materialize() == other.node.materialize()
    }
}

impl<C: ParameterCodec> core::fmt::Debug for QueryParams<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.node.materialize().iter()).finish()
    }
}

impl<C: ParameterCodec> core::fmt::Display for QueryParams<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_string())
    }
}

impl From<&str> for QueryParams {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for QueryParams {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl core::str::FromStr for QueryParams {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
