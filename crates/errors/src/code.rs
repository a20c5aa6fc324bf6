// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The closed set of recognized git failure categories.

use serde::{Deserialize, Serialize};

use crate::macros::error_codes;

/// A string that does not name any [`GitErrorCode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown git error code: {0}")]
pub struct UnknownErrorCode(pub String);

error_codes! {
    /// A recognized git failure category.
    ///
    /// Callers match on these to special-case failures (offering to trust a
    /// directory, prompting for credentials again, ...). Adding a member is a
    /// breaking change for every exhaustive match, including [`crate::describe`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum GitErrorCode {
        /// The remote rejected an SSH key that failed a key-age audit.
        SshKeyAuditUnverified,
        SshAuthenticationFailed,
        SshPermissionDenied,
        HttpsAuthenticationFailed,
        RemoteDisconnection,
        HostDown,
        RebaseConflicts,
        MergeConflicts,
        HttpsRepositoryNotFound,
        SshRepositoryNotFound,
        /// Push rejected because the remote has commits the local branch lacks.
        PushNotFastForward,
        BranchDeletionFailed,
        DefaultBranchDeletionFailed,
        RevertConflicts,
        EmptyRebasePatch,
        NoMatchingRemoteBranch,
        NoExistingRemoteBranch,
        NothingToCommit,
        NoSubmoduleMapping,
        SubmoduleRepositoryDoesNotExist,
        InvalidSubmoduleSha,
        LocalPermissionDenied,
        InvalidMerge,
        InvalidRebase,
        NonFastForwardMergeIntoEmptyHead,
        PatchDoesNotApply,
        BranchAlreadyExists,
        BadRevision,
        NotAGitRepository,
        CannotMergeUnrelatedHistories,
        LfsAttributeDoesNotMatch,
        BranchRenameFailed,
        PathDoesNotExist,
        InvalidObjectName,
        OutsideRepository,
        /// An `index.lock` (or similar) left behind by another git process.
        LockFileAlreadyExists,
        NoMergeToAbort,
        LocalChangesOverwritten,
        UnresolvedConflicts,
        GpgFailedToSignData,
        ConflictModifyDeletedInBranch,
        PushWithFileSizeExceedingLimit,
        HexBranchNameRejected,
        ForcePushRejected,
        InvalidRefLength,
        ProtectedBranchRequiresReview,
        ProtectedBranchForcePush,
        ProtectedBranchDeleteRejected,
        ProtectedBranchRequiredStatus,
        PushWithPrivateEmail,
        PushWithSecretDetected,
        /// `.git/config.lock` exists; see [`crate::parse_config_lock_file_path`].
        ConfigLockFileAlreadyExists,
        RemoteAlreadyExists,
        TagAlreadyExists,
        MergeWithLocalChanges,
        RebaseWithLocalChanges,
        MergeCommitNoMainlineOption,
        /// The repository is owned by another user and not in `safe.directory`.
        UnsafeDirectory,
        PathExistsButNotInRef,
        BadConfigValue,
    }
}

impl GitErrorCode {
    /// True for the codes that share the authentication explanation.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            GitErrorCode::SshAuthenticationFailed
                | GitErrorCode::SshPermissionDenied
                | GitErrorCode::HttpsAuthenticationFailed
        )
    }
}

#[cfg(test)]
#[path = "code_tests.rs"]
mod tests;
