//! Error handling and exit codes.

use strassen_core::constants::exit_codes;
use strassen_core::MatrixError;

/// Exit code for a multiplication error.
pub fn exit_code_for(err: &MatrixError) -> i32 {
    match err {
        MatrixError::DimensionMismatch { .. }
        | MatrixError::InvalidDimension(_)
        | MatrixError::InvalidData { .. } => exit_codes::ERROR_INPUT,
        MatrixError::AllocationFailure { .. } => exit_codes::ERROR_ALLOCATION,
        MatrixError::Mismatch => exit_codes::ERROR_MISMATCH,
        MatrixError::UnknownAlgorithm(_) => exit_codes::ERROR_CONFIG,
    }
}

/// Exit code for any application error, as a process status byte.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let code = err
        .downcast_ref::<MatrixError>()
        .map_or(exit_codes::ERROR_GENERIC, exit_code_for);
    u8::try_from(code).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(exit_code_for(&MatrixError::InvalidDimension(0)), 2);
        assert_eq!(exit_code_for(&MatrixError::Mismatch), 3);
        assert_eq!(exit_code_for(&MatrixError::UnknownAlgorithm("x".into())), 4);
        assert_eq!(
            exit_code_for(&MatrixError::AllocationFailure { elements: 1 }),
            5
        );
    }

    #[test]
    fn anyhow_errors() {
        let err = anyhow::Error::new(MatrixError::Mismatch);
        assert_eq!(exit_code(&err), 3);
        let err = anyhow::anyhow!("disk full");
        assert_eq!(exit_code(&err), 1);
    }
}
