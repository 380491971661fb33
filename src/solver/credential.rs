//! Credential handed to network-backed [`EquationSolver`](crate::solver::EquationSolver) implementations.
//!
//! The crate ships no network client, so nothing here constructs a
//! credential on its own. A caller that talks to a real service builds one
//! with [`SolverCredential::from_env`] (or [`SolverCredential::from_lookup`]
//! for a secret store), stores it in its solver, and reads the key through
//! [`SolverCredential::secret`] only when sending a request. The key never
//! lives in source, and `Debug` output stays redacted.
//!
//! ```
//! use math_stepper::{EquationSolver, SolverCredential, SolverError, SolverRequest, solve_equation};
//!
//! struct RemoteSolver {
//!     credential: SolverCredential,
//! }
//!
//! impl EquationSolver for RemoteSolver {
//!     fn solve(&self, request: &SolverRequest) -> Result<Option<String>, SolverError> {
//!         // a real client would send `request.prompt` with this key
//!         let _key = self.credential.secret();
//!         Ok(Some(format!("answer to {}", request.equation)))
//!     }
//! }
//!
//! let credential = SolverCredential::from_lookup("SOLVER_API_KEY", |_| Some("k".to_string()))?;
//! let solver = RemoteSolver { credential };
//! let result = solve_equation(&solver, "2x + 3 = 7");
//! assert_eq!(result.steps()[0].expression, "answer to 2x + 3 = 7");
//! # Ok::<(), SolverError>(())
//! ```

use std::env;
use std::fmt;

use log::{debug, warn};

use crate::solver::errors::SolverError;

/// API key for a solving service, read from the environment at runtime.
///
/// The secret is never printed; `Debug` shows only where it came from.
#[derive(Clone)]
pub struct SolverCredential {
    source: String,
    secret: String,
}

impl SolverCredential {
    /// # Errors
    ///
    /// Returns [`SolverError::MissingCredential`] if the variable is unset or
    /// blank.
    pub fn from_env(var: &str) -> Result<Self, SolverError> {
        Self::from_lookup(var, |key| env::var(key).ok())
    }

    /// # Errors
    ///
    /// Returns [`SolverError::MissingCredential`] if `lookup` yields nothing
    /// or only whitespace.
    pub fn from_lookup(
        name: &str,
        lookup: impl FnOnce(&str) -> Option<String>,
    ) -> Result<Self, SolverError> {
        match lookup(name) {
            Some(secret) if !secret.trim().is_empty() => {
                debug!("Loaded solver credential from '{}'", name);
                Ok(Self {
                    source: name.to_string(),
                    secret: secret.trim().to_string(),
                })
            }
            _ => {
                warn!("Solver credential '{}' is not set", name);
                Err(SolverError::MissingCredential(name.to_string()))
            }
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for SolverCredential {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SolverCredential")
            .field("source", &self.source)
            .field("secret", &"<redacted>")
            .finish()
    }
}
