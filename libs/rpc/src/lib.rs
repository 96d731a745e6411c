//! Checked-in protobuf/gRPC code for the workspace's services.
//!
//! Sources live under `proto/`; the generated files under `src/gen/` are
//! committed and not rebuilt at compile time.

pub mod user {
    pub mod v1 {
        include!("gen/user.v1.rs");
    }

    pub use v1::*;
}
