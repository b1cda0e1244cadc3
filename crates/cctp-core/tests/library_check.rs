//! Startup size check of the library boundary

mod common;

use common::MisSizedLibrary;
use sc_cctp_core::constants::SC_PROOF_SIZE;
use sc_cctp_core::{
    CctpError, CctpLibrary, CheckedLibrary, LibraryChecker, LibraryError, SoftwareLibrary,
};

#[test]
fn test_software_library_passes() {
    let lib = CheckedLibrary::new(SoftwareLibrary::new()).unwrap();
    LibraryChecker::enforce_type_sizes(lib.inner());
}

#[test]
fn test_mismatch_rejected() {
    let lib = MisSizedLibrary::with_proof_size(SC_PROOF_SIZE + 3);

    let err = CheckedLibrary::new(lib).unwrap_err();
    assert_eq!(
        err,
        LibraryError::SizeMismatch {
            object: "proof",
            compiled: SC_PROOF_SIZE,
            library: SC_PROOF_SIZE + 3,
        }
    );
}

#[test]
#[should_panic(expected = "size mismatch")]
fn test_enforce_panics_on_mismatch() {
    let lib = MisSizedLibrary::with_proof_size(0);
    LibraryChecker::enforce_type_sizes(&lib);
}

fn checked_proof_size(lib: MisSizedLibrary) -> Result<usize, CctpError> {
    let lib = CheckedLibrary::new(lib)?;
    Ok(lib.into_inner().sc_proof_size_in_bytes())
}

#[test]
fn test_mismatch_surfaces_as_library_error() {
    assert!(matches!(
        checked_proof_size(MisSizedLibrary::with_proof_size(1)),
        Err(CctpError::Library(LibraryError::SizeMismatch { object: "proof", .. }))
    ));
    assert_eq!(
        checked_proof_size(MisSizedLibrary::with_proof_size(SC_PROOF_SIZE)),
        Ok(SC_PROOF_SIZE)
    );
}
