//! FFI bindings for the wallet core
//!
//! This module provides C-compatible function bindings for the wallet core.
//! Every call returns a `SecureResult`; `error_code` is `WalletError::code()`
//! or one of the boundary codes below.
//!
//! SECURITY: This module implements hardened FFI boundaries with:
//! - Input length and UTF-8 validation before any parsing
//! - Zeroization of returned buffers when they are freed
//! - Error codes that never echo secret input back to the caller

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;
use zeroize::Zeroize;

use crate::shared::error::WalletError;
use crate::shared::types::WalletResult;

/// Payload contained an interior NUL and could not cross the boundary
pub const FFI_STRING_CONVERSION_FAILED: i32 = 15;
/// Pointer was null, not UTF-8, empty or too long
pub const FFI_INVALID_INPUT: i32 = 16;

const MAX_PHRASE_LENGTH: usize = 512;
const MAX_PASSPHRASE_LENGTH: usize = 1024;
const MAX_PATH_LENGTH: usize = 256;
const MAX_PUBLIC_KEY_LENGTH: usize = 132;

/// Secure FFI result wrapper
#[repr(C)]
pub struct SecureResult {
    success: bool,
    data: *mut c_char,
    error_code: i32,
}

impl SecureResult {
    fn success(data: String) -> Self {
        match CString::new(data) {
            Ok(c_string) => Self {
                success: true,
                data: c_string.into_raw(),
                error_code: 0,
            },
            Err(err) => {
                let mut bytes = err.into_vec();
                bytes.zeroize();
                Self::error(FFI_STRING_CONVERSION_FAILED)
            }
        }
    }

    fn error(error_code: i32) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            error_code,
        }
    }

    fn from_result(result: WalletResult<String>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(err) => {
                log::warn!("FFI call failed with code {}", err.code());
                Self::error(err.code())
            }
        }
    }
}

/// Input validation: non-null, UTF-8, bounded length
fn validate_input(input: *const c_char, max_length: usize, allow_empty: bool) -> Result<String, WalletError> {
    if input.is_null() {
        return Err(WalletError::validation("Null input pointer"));
    }

    let input_str = unsafe {
        match CStr::from_ptr(input).to_str() {
            Ok(s) => s,
            Err(_) => return Err(WalletError::validation("Invalid UTF-8 input")),
        }
    };

    if input_str.len() > max_length {
        return Err(WalletError::validation("Input too long"));
    }

    if input_str.is_empty() && !allow_empty {
        return Err(WalletError::validation("Empty input"));
    }

    Ok(input_str.to_string())
}

/// Generate a new mnemonic phrase of `strength_bits` bits
#[no_mangle]
pub extern "C" fn hdwallet_generate_phrase(strength_bits: u32) -> SecureResult {
    SecureResult::from_result(crate::generate_phrase(strength_bits as usize))
}

/// Derive master and child keys; `data` is a JSON object of four hex fields
#[no_mangle]
pub extern "C" fn hdwallet_derive(
    phrase: *const c_char,
    passphrase: *const c_char,
    path: *const c_char,
) -> SecureResult {
    let mut phrase_str = match validate_input(phrase, MAX_PHRASE_LENGTH, false) {
        Ok(s) => s,
        Err(_) => return SecureResult::error(FFI_INVALID_INPUT),
    };
    let mut passphrase_str = match validate_input(passphrase, MAX_PASSPHRASE_LENGTH, true) {
        Ok(s) => s,
        Err(_) => {
            phrase_str.zeroize();
            return SecureResult::error(FFI_INVALID_INPUT);
        }
    };
    let path_str = match validate_input(path, MAX_PATH_LENGTH, false) {
        Ok(s) => s,
        Err(_) => {
            phrase_str.zeroize();
            passphrase_str.zeroize();
            return SecureResult::error(FFI_INVALID_INPUT);
        }
    };

    let result = crate::derive(&phrase_str, &passphrase_str, &path_str)
        .and_then(|keys| Ok(serde_json::to_string(&keys)?));
    phrase_str.zeroize();
    passphrase_str.zeroize();
    SecureResult::from_result(result)
}

/// Mainnet P2PKH address for a hex public key
#[no_mangle]
pub extern "C" fn hdwallet_bitcoin_address(public_key_hex: *const c_char) -> SecureResult {
    match validate_input(public_key_hex, MAX_PUBLIC_KEY_LENGTH, false) {
        Ok(input) => SecureResult::from_result(crate::bitcoin_address(&input)),
        Err(_) => SecureResult::error(FFI_INVALID_INPUT),
    }
}

/// EIP-55 Ethereum address for a hex public key
#[no_mangle]
pub extern "C" fn hdwallet_ethereum_address(public_key_hex: *const c_char) -> SecureResult {
    match validate_input(public_key_hex, MAX_PUBLIC_KEY_LENGTH, false) {
        Ok(input) => SecureResult::from_result(crate::ethereum_address(&input)),
        Err(_) => SecureResult::error(FFI_INVALID_INPUT),
    }
}

/// Free a SecureResult's payload, zeroizing it first
#[no_mangle]
pub extern "C" fn hdwallet_free_result(result: *mut SecureResult) {
    if !result.is_null() {
        unsafe {
            let result_ref = &mut *result;
            if !result_ref.data.is_null() {
                let mut bytes = CString::from_raw(result_ref.data).into_bytes();
                bytes.zeroize();
                result_ref.data = ptr::null_mut();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABANDON_ABOUT: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn take_data(mut result: SecureResult) -> Option<String> {
        let data = if result.data.is_null() {
            None
        } else {
            Some(unsafe { CStr::from_ptr(result.data) }.to_str().unwrap().to_string())
        };
        hdwallet_free_result(&mut result);
        assert!(result.data.is_null());
        data
    }

    #[test]
    fn test_generate_phrase_ffi() {
        let result = hdwallet_generate_phrase(256);
        assert!(result.success);
        assert_eq!(result.error_code, 0);
        let phrase = take_data(result).unwrap();
        assert_eq!(phrase.split(' ').count(), 24);

        let bad = hdwallet_generate_phrase(64);
        assert!(!bad.success);
        assert_eq!(bad.error_code, WalletError::InvalidStrength(64).code());
        assert!(take_data(bad).is_none());
    }

    #[test]
    fn test_derive_ffi() {
        let phrase = CString::new(ABANDON_ABOUT).unwrap();
        let passphrase = CString::new("").unwrap();
        let path = CString::new("m/44'/0'/0'/0/0").unwrap();

        let result = hdwallet_derive(phrase.as_ptr(), passphrase.as_ptr(), path.as_ptr());
        assert!(result.success);
        let json: serde_json::Value = serde_json::from_str(&take_data(result).unwrap()).unwrap();
        let child_public_key = json["child_public_key"].as_str().unwrap().to_string();
        assert_eq!(
            child_public_key,
            "03aaeb52dd7494c361049de67cc680e83ebcbbbdbeb13637d92cd845f70308af5e"
        );

        let key = CString::new(child_public_key).unwrap();
        let address = take_data(hdwallet_bitcoin_address(key.as_ptr())).unwrap();
        assert_eq!(address, "1LqBGSKuX5yYUonjxT5qGfpUsXKYYWeabA");
        let eth = take_data(hdwallet_ethereum_address(key.as_ptr())).unwrap();
        assert!(eth.starts_with("0x"));
    }

    #[test]
    fn test_ffi_rejects_bad_input() {
        let path = CString::new("44'/0'").unwrap();
        let result = hdwallet_derive(ptr::null(), ptr::null(), path.as_ptr());
        assert_eq!(result.error_code, FFI_INVALID_INPUT);

        let phrase = CString::new(ABANDON_ABOUT).unwrap();
        let passphrase = CString::new("").unwrap();
        let bad_path = CString::new("44'/zero").unwrap();
        let result = hdwallet_derive(phrase.as_ptr(), passphrase.as_ptr(), bad_path.as_ptr());
        assert!(!result.success);
        assert_eq!(
            result.error_code,
            WalletError::path("malformed").code()
        );

        let key = CString::new("not-a-key").unwrap();
        let result = hdwallet_bitcoin_address(key.as_ptr());
        assert_eq!(result.error_code, WalletError::public_key("bad").code());
    }
}
