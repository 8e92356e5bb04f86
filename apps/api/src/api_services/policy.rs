use std::fs;
use std::path::Path;

use hearth_application::AccessPolicy;
use hearth_core::AppError;
use tracing::{info, warn};

/// Loads the access policy, falling back to the built-in tables.
///
/// Configuration defects are logged and tolerated: a role without modules
/// resolves to the forbidden page instead of stopping the server.
pub fn load_access_policy(path: Option<&Path>) -> Result<AccessPolicy, AppError> {
    let policy = match path {
        Some(path) => {
            let document = fs::read_to_string(path).map_err(|error| {
                AppError::Validation(format!(
                    "failed to read access policy '{}': {error}",
                    path.display()
                ))
            })?;
            let policy = AccessPolicy::from_json(document.as_str())?;
            info!(path = %path.display(), "loaded access policy document");
            policy
        }
        None => AccessPolicy::standard(),
    };

    for defect in policy.configuration_defects() {
        warn!(%defect, "access policy defect");
    }

    Ok(policy)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use hearth_domain::{Module, Role};

    use super::load_access_policy;

    #[test]
    fn missing_path_uses_standard_policy() {
        let policy = load_access_policy(None);
        assert_eq!(
            policy
                .ok()
                .map(|policy| policy.allowed_modules(Some(Role::Others)).to_vec()),
            Some(vec![Module::Listings])
        );
    }

    #[test]
    fn unreadable_document_is_a_validation_error() {
        let result = load_access_policy(Some(Path::new("/nonexistent/hearth-policy.json")));
        assert!(matches!(
            result,
            Err(hearth_core::AppError::Validation(_))
        ));
    }
}
