use std::{cmp::Ordering, sync::Arc};

/// The primary time of a value, in seconds since the Unix epoch.
///
/// `None` stands for "no primary time". Since `None` orders before every
/// `Some`, a stamped value is always considered later than an unstamped one.
pub type PrimaryTime = Option<i64>;

/// Sentinel for values that carry no primary time.
pub const NO_PRIMARY_TIME: PrimaryTime = None;

/// Number of seconds in one month (the mean Gregorian month).
pub const SECONDS_PER_MONTH: f64 = 2_629_746.0;

/// Represents a runtime value of the operator core.
///
/// Every variant except [`Value::List`] carries a primary time recording when
/// the data point was observed. Lists never carry a primary time themselves;
/// see [`common_time`](crate::interpreter::operator::list::common_time).
///
/// Lists are immutable once built and never contain other lists directly.
#[derive(Debug, Clone)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number {
        /// The number.
        value: f64,
        /// Primary time of the value.
        time:  PrimaryTime,
    },
    /// A point in time, in whole seconds since the Unix epoch.
    Time {
        /// Seconds since the epoch.
        value: i64,
        /// Primary time of the value.
        time:  PrimaryTime,
    },
    /// A duration, counted either in months or in seconds.
    Duration {
        /// Amount of `months` or seconds.
        value:  f64,
        /// `true` if `value` counts months, `false` if it counts seconds.
        months: bool,
        /// Primary time of the value.
        time:   PrimaryTime,
    },
    /// A string of Unicode text.
    String {
        /// The text.
        value: String,
        /// Primary time of the value.
        time:  PrimaryTime,
    },
    /// An explicit `true` or `false`.
    Boolean {
        /// The truth value.
        value: bool,
        /// Primary time of the value.
        time:  PrimaryTime,
    },
    /// The null value, optionally stamped with a primary time.
    Null {
        /// Primary time of the value.
        time: PrimaryTime,
    },
    /// An ordered, immutable sequence of values.
    List(Arc<[Self]>),
}

impl Value {
    /// The unstamped null value.
    pub const NULL: Self = Self::Null { time: None };
    /// The unstamped `true` value.
    pub const TRUE: Self = Self::Boolean { value: true,
                                           time:  None, };
    /// The unstamped `false` value.
    pub const FALSE: Self = Self::Boolean { value: false,
                                            time:  None, };
    /// The number `0` without a primary time.
    pub const ZERO: Self = Self::Number { value: 0.0,
                                          time:  None, };
    /// The number `100` without a primary time.
    pub const ONE_HUNDRED: Self = Self::Number { value: 100.0,
                                                 time:  None, };

    /// Creates a number without a primary time.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number { value, time: None }
    }

    /// Creates a time value without a primary time.
    #[must_use]
    pub const fn time(value: i64) -> Self {
        Self::Time { value, time: None }
    }

    /// Creates a duration without a primary time.
    #[must_use]
    pub const fn duration(value: f64, months: bool) -> Self {
        Self::Duration { value,
                         months,
                         time: None }
    }

    /// Creates a string without a primary time.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::String { value: value.into(),
                       time:  None, }
    }

    /// Creates a boolean with the given primary time.
    #[must_use]
    pub const fn boolean(value: bool, time: PrimaryTime) -> Self {
        Self::Boolean { value, time }
    }

    /// Creates a null value with the given primary time.
    #[must_use]
    pub const fn null(time: PrimaryTime) -> Self {
        Self::Null { time }
    }

    /// Creates a list from the given elements.
    #[must_use]
    pub fn list(values: Vec<Self>) -> Self {
        Self::List(values.into())
    }

    /// Creates an empty list.
    #[must_use]
    pub fn empty_list() -> Self {
        Self::List(Arc::from([]))
    }

    /// Returns the primary time of the value.
    ///
    /// Lists carry no primary time and always return [`NO_PRIMARY_TIME`].
    #[must_use]
    pub const fn primary_time(&self) -> PrimaryTime {
        match self {
            Self::Number { time, .. }
            | Self::Time { time, .. }
            | Self::Duration { time, .. }
            | Self::String { time, .. }
            | Self::Boolean { time, .. }
            | Self::Null { time } => *time,
            Self::List(_) => NO_PRIMARY_TIME,
        }
    }

    /// Returns a structurally identical value whose primary time is `time`.
    ///
    /// Applied to a list, every element is stamped.
    ///
    /// # Example
    /// ```
    /// use arden_ops::interpreter::value::core::Value;
    ///
    /// let v = Value::number(4.0).with_time(Some(60));
    /// assert_eq!(v.primary_time(), Some(60));
    /// assert_eq!(v, Value::number(4.0));
    /// ```
    #[must_use]
    pub fn with_time(self, time: PrimaryTime) -> Self {
        match self {
            Self::Number { value, .. } => Self::Number { value, time },
            Self::Time { value, .. } => Self::Time { value, time },
            Self::Duration { value, months, .. } => Self::Duration { value, months, time },
            Self::String { value, .. } => Self::String { value, time },
            Self::Boolean { value, .. } => Self::Boolean { value, time },
            Self::Null { .. } => Self::Null { time },
            Self::List(items) => Self::List(items.iter()
                                                 .map(|item| item.clone().with_time(time))
                                                 .collect()),
        }
    }

    /// Returns `true` only for an explicit boolean `true`.
    #[must_use]
    pub const fn is_true(&self) -> bool {
        matches!(self, Self::Boolean { value: true, .. })
    }

    /// Returns `true` only for an explicit boolean `false`.
    #[must_use]
    pub const fn is_false(&self) -> bool {
        matches!(self, Self::Boolean { value: false, .. })
    }

    /// Returns `true` if the value is [`Null`](Value::Null).
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null { .. })
    }

    /// Returns `true` if the value is a [`List`](Value::List).
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(..))
    }

    /// Returns the elements of the value as a shared slice.
    ///
    /// A list hands out its own elements; any other value is wrapped into a
    /// one-element sequence. This is the promotion every list operator starts
    /// from.
    #[must_use]
    pub fn to_list(&self) -> Arc<[Self]> {
        match self {
            Self::List(items) => Arc::clone(items),
            other => Arc::from([other.clone()]),
        }
    }

    /// Returns the string payload, if the value is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Converts a duration into seconds. Returns `None` for other variants.
    #[must_use]
    pub fn to_seconds(&self) -> Option<f64> {
        match self {
            Self::Duration { value, months, .. } => {
                Some(if *months { value * SECONDS_PER_MONTH } else { *value })
            },
            _ => None,
        }
    }

    /// Human-readable name of the variant, used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number { .. } => "number",
            Self::Time { .. } => "time",
            Self::Duration { .. } => "duration",
            Self::String { .. } => "string",
            Self::Boolean { .. } => "boolean",
            Self::Null { .. } => "null",
            Self::List(_) => "list",
        }
    }

    /// Orders two values of compatible variants.
    ///
    /// Numbers, times, durations and strings compare among themselves.
    /// Durations in different units are compared in seconds. Every other
    /// pairing, and any comparison involving NaN, is incomparable and yields
    /// `None`.
    ///
    /// # Example
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use arden_ops::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::number(1.0).compare(&Value::number(2.0)), Some(Ordering::Less));
    /// assert_eq!(Value::number(1.0).compare(&Value::string("1")), None);
    /// ```
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Number { value: a, .. }, Self::Number { value: b, .. }) => a.partial_cmp(b),
            (Self::Time { value: a, .. }, Self::Time { value: b, .. }) => Some(a.cmp(b)),
            (Self::Duration { value: a,
                              months: ma,
                              .. },
             Self::Duration { value: b,
                              months: mb,
                              .. }) => {
                if ma == mb {
                    a.partial_cmp(b)
                } else {
                    self.to_seconds()?.partial_cmp(&other.to_seconds()?)
                }
            },
            (Self::String { value: a, .. }, Self::String { value: b, .. }) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Structural equality that also requires equal primary times.
    ///
    /// Lists compare element by element.
    #[must_use]
    pub fn identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.identical(y))
            },
            _ => self == other && self.primary_time() == other.primary_time(),
        }
    }
}

impl PartialEq for Value {
    /// Structural equality over the payload. Primary times are ignored.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number { value: a, .. }, Self::Number { value: b, .. }) => a == b,
            (Self::Time { value: a, .. }, Self::Time { value: b, .. }) => a == b,
            (Self::Duration { .. }, Self::Duration { .. }) => {
                self.compare(other) == Some(Ordering::Equal)
            },
            (Self::String { value: a, .. }, Self::String { value: b, .. }) => a == b,
            (Self::Boolean { value: a, .. }, Self::Boolean { value: b, .. }) => a == b,
            (Self::Null { .. }, Self::Null { .. }) => true,
            (Self::List(a), Self::List(b)) => a == b,
            _ => false,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::boolean(v, None)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::string(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::string(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::list(v)
    }
}
