//! Registry of recognized exception kind names.
//!
//! Invariant: the order is fixed and append-only. Position 0 is the generic
//! `"Error"` kind, positions `1..=LEGACY_CODE_MAX` double as the legacy numeric
//! codes, and later positions carry no legacy code.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Highest position that is also a legacy numeric code.
pub const LEGACY_CODE_MAX: u16 = 25;

/// Kind names in registry order. `KIND_NAMES[kind as usize] == kind.name()`.
pub const KIND_NAMES: [&str; ExceptionKind::COUNT] = [
    "Error",
    "IndexSizeError",
    "DomstringSizeError",
    "HierarchyRequestError",
    "WrongDocumentError",
    "InvalidCharacterError",
    "NoDataAllowedError",
    "NoModificationAllowedError",
    "NotFoundError",
    "NotSupportedError",
    "InUseAttributeError",
    "InvalidStateError",
    "SyntaxError",
    "InvalidModificationError",
    "NamespaceError",
    "InvalidAccessError",
    "ValidationError",
    "TypeMismatchError",
    "SecurityError",
    "NetworkError",
    "AbortError",
    "URLMismatchError",
    "QuotaExceededError",
    "TimeoutError",
    "InvalidNodeTypeError",
    "DataCloneError",
    "EncodingError",
    "NotReadableError",
    "UnknownError",
    "ConstraintError",
    "DataError",
    "TransactionInactiveError",
    "ReadOnlyError",
    "VersionError",
    "OperationError",
    "NotAllowedError",
    "OptOutError",
];

/// Recognized exception kind. The discriminant is the registry position.
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExceptionKind {
    Error = 0,
    IndexSize = 1,
    DomstringSize = 2,
    HierarchyRequest = 3,
    WrongDocument = 4,
    InvalidCharacter = 5,
    NoDataAllowed = 6,
    NoModificationAllowed = 7,
    NotFound = 8,
    NotSupported = 9,
    InUseAttribute = 10,
    InvalidState = 11,
    Syntax = 12,
    InvalidModification = 13,
    Namespace = 14,
    InvalidAccess = 15,
    Validation = 16,
    TypeMismatch = 17,
    Security = 18,
    Network = 19,
    Abort = 20,
    UrlMismatch = 21,
    QuotaExceeded = 22,
    Timeout = 23,
    InvalidNodeType = 24,
    DataClone = 25,
    Encoding = 26,
    NotReadable = 27,
    Unknown = 28,
    Constraint = 29,
    Data = 30,
    TransactionInactive = 31,
    ReadOnly = 32,
    Version = 33,
    Operation = 34,
    NotAllowed = 35,
    OptOut = 36,
}

impl ExceptionKind {
    pub const COUNT: usize = 37;

    /// Every kind in registry order.
    pub const ALL: [ExceptionKind; Self::COUNT] = [
        Self::Error,
        Self::IndexSize,
        Self::DomstringSize,
        Self::HierarchyRequest,
        Self::WrongDocument,
        Self::InvalidCharacter,
        Self::NoDataAllowed,
        Self::NoModificationAllowed,
        Self::NotFound,
        Self::NotSupported,
        Self::InUseAttribute,
        Self::InvalidState,
        Self::Syntax,
        Self::InvalidModification,
        Self::Namespace,
        Self::InvalidAccess,
        Self::Validation,
        Self::TypeMismatch,
        Self::Security,
        Self::Network,
        Self::Abort,
        Self::UrlMismatch,
        Self::QuotaExceeded,
        Self::Timeout,
        Self::InvalidNodeType,
        Self::DataClone,
        Self::Encoding,
        Self::NotReadable,
        Self::Unknown,
        Self::Constraint,
        Self::Data,
        Self::TransactionInactive,
        Self::ReadOnly,
        Self::Version,
        Self::Operation,
        Self::NotAllowed,
        Self::OptOut,
    ];

    pub const fn name(self) -> &'static str {
        KIND_NAMES[self as usize]
    }

    pub const fn position(self) -> usize {
        self as usize
    }

    /// Legacy numeric code, or 0 for kinds registered after the legacy range.
    pub const fn legacy_code(self) -> u16 {
        let position = self as u16;
        if position >= 1 && position <= LEGACY_CODE_MAX {
            position
        } else {
            0
        }
    }

    /// Kind for a legacy code in `1..=LEGACY_CODE_MAX`.
    pub fn from_legacy_code(code: u16) -> Option<ExceptionKind> {
        if (1..=LEGACY_CODE_MAX).contains(&code) {
            Some(Self::ALL[code as usize])
        } else {
            None
        }
    }

    /// Exact, case-sensitive lookup of a registry name.
    pub fn from_name(name: &str) -> Option<ExceptionKind> {
        positions().get(name).copied()
    }
}

impl std::fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn positions() -> &'static HashMap<&'static str, ExceptionKind> {
    static POSITIONS: OnceLock<HashMap<&'static str, ExceptionKind>> = OnceLock::new();
    POSITIONS.get_or_init(|| {
        ExceptionKind::ALL
            .iter()
            .map(|kind| (kind.name(), *kind))
            .collect()
    })
}

/// Name stored at `position`, if any.
pub fn name_at(position: usize) -> Option<&'static str> {
    KIND_NAMES.get(position).copied()
}

/// Registry position of `name`, if it is a recognized kind.
pub fn position_of(name: &str) -> Option<usize> {
    ExceptionKind::from_name(name).map(ExceptionKind::position)
}

/// Legacy numeric code for `name`: its position when that lies in
/// `1..=LEGACY_CODE_MAX`, otherwise 0. Unknown names also map to 0.
pub fn legacy_code_of(name: &str) -> u16 {
    ExceptionKind::from_name(name).map_or(0, ExceptionKind::legacy_code)
}

/// Iterate the registry in position order.
pub fn kinds() -> impl Iterator<Item = ExceptionKind> {
    ExceptionKind::ALL.into_iter()
}
