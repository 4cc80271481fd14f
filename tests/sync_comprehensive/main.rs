//! Sync Comprehensive Test Suite
//!
//! End-to-end tests for the synchronization core, driven through the public
//! `jsonsync` API.
//!
//! ## Test Tiers
//!
//! - **Tier 1**: Path addressing and node row invariants
//! - **Tier 2**: Store and editor loop suppression
//! - **Tier 3**: Merge-on-save through the edit session
//! - **Tier 4**: Stale edits and cancellation
//! - **Tier 5**: Configuration and diagnostics
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test sync_comprehensive
//! ```

// Test modules
mod test_utils;

// Tier 1: Invariants
mod tier1_path_invariants;
mod tier1_row_invariants;

// Tier 2: Loop suppression
mod tier2_loop_suppression;

// Tier 3: Merge-on-save
mod tier3_merge_on_save;

// Tier 4: Stale edits
mod tier4_stale_edits;

// Tier 5: Configuration
mod tier5_configuration;
