mod node;

pub use node::NodePackageManager;

/// The installer to use: whatever was chosen on the command line or in the
/// config file, otherwise npm. The generated project is never inspected.
pub fn resolve_package_manager(explicit: Option<NodePackageManager>) -> NodePackageManager {
    explicit.unwrap_or(NodePackageManager::Npm)
}
