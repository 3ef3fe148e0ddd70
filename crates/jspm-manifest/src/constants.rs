//! Names and defaults of the manifest schema.
//!
//! Directory defaults derive from the resolved `baseURL`: the packages
//! directory is `<baseURL>/jspm_packages` and the loader config file is
//! `<baseURL>/jspm.js` unless the manifest says otherwise.

use jspm_document::KeyOrder;

/// Reserved key under which jspm settings may be nested.
pub const NAMESPACE_KEY: &str = "jspm";

/// Packages directory name, relative to `baseURL`.
pub const DEFAULT_PACKAGES_DIR: &str = "jspm_packages";

/// Loader config file name, relative to `baseURL`.
pub const DEFAULT_CONFIG_FILE: &str = "jspm.js";

/// Suggested project code directory, relative to `baseURL`.
pub const DEFAULT_LIB_DIR: &str = "lib";

/// Key of the main loader config inside `configFiles`.
pub const CONFIG_FILE_KEY: &str = "jspm";

/// Registry used when the manifest names none.
pub const FALLBACK_REGISTRY: &str = "jspm";

/// `baseURL` as written when it is the project directory itself.
pub const CURRENT_DIR: &str = ".";

pub const DEPENDENCIES: &str = "dependencies";
pub const PEER_DEPENDENCIES: &str = "peerDependencies";
pub const DEV_DEPENDENCIES: &str = "devDependencies";

/// The three dependency groups, in schema order.
pub const DEPENDENCY_GROUPS: [&str; 3] = [DEPENDENCIES, DEV_DEPENDENCIES, PEER_DEPENDENCIES];

/// Key order for new entries, mirrored under the namespace key.
pub fn manifest_key_order() -> KeyOrder {
    fn fields() -> KeyOrder {
        KeyOrder::new()
            .key("name")
            .nested(
                "directories",
                KeyOrder::new()
                    .key("baseURL")
                    .key("packages")
                    .key("lib")
                    .key("dist"),
            )
            .key("configFile")
            .nested("configFiles", KeyOrder::new().key(CONFIG_FILE_KEY))
            .key("registry")
            .key(DEPENDENCIES)
            .key(DEV_DEPENDENCIES)
            .key(PEER_DEPENDENCIES)
            .key("overrides")
    }

    fields().nested(NAMESPACE_KEY, fields())
}
