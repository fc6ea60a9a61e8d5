//! Legacy numeric exception codes.
//!
//! Each constant is evaluated from the registry at compile time, so a code can
//! only change if the registry order changes.

use crate::registry::{ExceptionKind, LEGACY_CODE_MAX};

pub const INDEX_SIZE_ERR: u16 = ExceptionKind::IndexSize.legacy_code();
pub const DOMSTRING_SIZE_ERR: u16 = ExceptionKind::DomstringSize.legacy_code();
pub const HIERARCHY_REQUEST_ERR: u16 = ExceptionKind::HierarchyRequest.legacy_code();
pub const WRONG_DOCUMENT_ERR: u16 = ExceptionKind::WrongDocument.legacy_code();
pub const INVALID_CHARACTER_ERR: u16 = ExceptionKind::InvalidCharacter.legacy_code();
pub const NO_DATA_ALLOWED_ERR: u16 = ExceptionKind::NoDataAllowed.legacy_code();
pub const NO_MODIFICATION_ALLOWED_ERR: u16 = ExceptionKind::NoModificationAllowed.legacy_code();
pub const NOT_FOUND_ERR: u16 = ExceptionKind::NotFound.legacy_code();
pub const NOT_SUPPORTED_ERR: u16 = ExceptionKind::NotSupported.legacy_code();
pub const INUSE_ATTRIBUTE_ERR: u16 = ExceptionKind::InUseAttribute.legacy_code();
pub const INVALID_STATE_ERR: u16 = ExceptionKind::InvalidState.legacy_code();
pub const SYNTAX_ERR: u16 = ExceptionKind::Syntax.legacy_code();
pub const INVALID_MODIFICATION_ERR: u16 = ExceptionKind::InvalidModification.legacy_code();
pub const NAMESPACE_ERR: u16 = ExceptionKind::Namespace.legacy_code();
pub const INVALID_ACCESS_ERR: u16 = ExceptionKind::InvalidAccess.legacy_code();
pub const VALIDATION_ERR: u16 = ExceptionKind::Validation.legacy_code();
pub const TYPE_MISMATCH_ERR: u16 = ExceptionKind::TypeMismatch.legacy_code();
pub const SECURITY_ERR: u16 = ExceptionKind::Security.legacy_code();
pub const NETWORK_ERR: u16 = ExceptionKind::Network.legacy_code();
pub const ABORT_ERR: u16 = ExceptionKind::Abort.legacy_code();
pub const URL_MISMATCH_ERR: u16 = ExceptionKind::UrlMismatch.legacy_code();
pub const QUOTA_EXCEEDED_ERR: u16 = ExceptionKind::QuotaExceeded.legacy_code();
pub const TIMEOUT_ERR: u16 = ExceptionKind::Timeout.legacy_code();
pub const INVALID_NODE_TYPE_ERR: u16 = ExceptionKind::InvalidNodeType.legacy_code();
pub const DATA_CLONE_ERR: u16 = ExceptionKind::DataClone.legacy_code();

/// `(constant name, code)` pairs in code order.
pub const LEGACY_CODES: [(&str, u16); LEGACY_CODE_MAX as usize] = [
    ("INDEX_SIZE_ERR", INDEX_SIZE_ERR),
    ("DOMSTRING_SIZE_ERR", DOMSTRING_SIZE_ERR),
    ("HIERARCHY_REQUEST_ERR", HIERARCHY_REQUEST_ERR),
    ("WRONG_DOCUMENT_ERR", WRONG_DOCUMENT_ERR),
    ("INVALID_CHARACTER_ERR", INVALID_CHARACTER_ERR),
    ("NO_DATA_ALLOWED_ERR", NO_DATA_ALLOWED_ERR),
    ("NO_MODIFICATION_ALLOWED_ERR", NO_MODIFICATION_ALLOWED_ERR),
    ("NOT_FOUND_ERR", NOT_FOUND_ERR),
    ("NOT_SUPPORTED_ERR", NOT_SUPPORTED_ERR),
    ("INUSE_ATTRIBUTE_ERR", INUSE_ATTRIBUTE_ERR),
    ("INVALID_STATE_ERR", INVALID_STATE_ERR),
    ("SYNTAX_ERR", SYNTAX_ERR),
    ("INVALID_MODIFICATION_ERR", INVALID_MODIFICATION_ERR),
    ("NAMESPACE_ERR", NAMESPACE_ERR),
    ("INVALID_ACCESS_ERR", INVALID_ACCESS_ERR),
    ("VALIDATION_ERR", VALIDATION_ERR),
    ("TYPE_MISMATCH_ERR", TYPE_MISMATCH_ERR),
    ("SECURITY_ERR", SECURITY_ERR),
    ("NETWORK_ERR", NETWORK_ERR),
    ("ABORT_ERR", ABORT_ERR),
    ("URL_MISMATCH_ERR", URL_MISMATCH_ERR),
    ("QUOTA_EXCEEDED_ERR", QUOTA_EXCEEDED_ERR),
    ("TIMEOUT_ERR", TIMEOUT_ERR),
    ("INVALID_NODE_TYPE_ERR", INVALID_NODE_TYPE_ERR),
    ("DATA_CLONE_ERR", DATA_CLONE_ERR),
];
