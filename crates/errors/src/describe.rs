// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-facing descriptions for [`GitErrorCode`].

use crate::{parse_bad_config_value, GitErrorCode};

const AUTH_FAILURE: &str = "Authentication failed. Some common reasons include:

- You are not logged in to your account: check your account settings.
- You may need to log out and log back in to refresh your token.
- You do not have permission to access this repository.
- The repository is archived on the hosting service. Check the repository settings to confirm you are still permitted to push commits.
- If you use SSH authentication, check that your key is added to the ssh-agent and associated with your account.
- If you use SSH authentication, ensure the host key verification passes for your repository hosting service.
- If you used username / password authentication, you might need to use a Personal Access Token instead of your account password. Check the documentation of your repository hosting service.";

/// Describe a classified failure.
///
/// `stderr` is consulted only by codes that carry parameters (the key and
/// value of a bad config setting). `None` means git's own text is the best
/// available message and should be shown as-is.
///
/// The match is exhaustive with no wildcard arm: a new [`GitErrorCode`]
/// member does not compile until it is given a description here.
pub fn describe(code: GitErrorCode, stderr: &str) -> Option<String> {
    let text = match code {
        GitErrorCode::SshAuthenticationFailed
        | GitErrorCode::SshPermissionDenied
        | GitErrorCode::HttpsAuthenticationFailed => AUTH_FAILURE,
        GitErrorCode::BadConfigValue => {
            return Some(match parse_bad_config_value(stderr) {
                Some(info) => {
                    format!("Unsupported value '{}' for git config key '{}'", info.value, info.key)
                }
                None => "Unsupported git configuration value.".to_string(),
            });
        }
        GitErrorCode::SshKeyAuditUnverified => "The SSH key is unverified.",
        GitErrorCode::RemoteDisconnection => {
            "The remote disconnected. Check your Internet connection and try again."
        }
        GitErrorCode::HostDown => "The host is down. Check your Internet connection and try again.",
        GitErrorCode::RebaseConflicts => {
            "We found some conflicts while trying to rebase. Please resolve the conflicts before continuing."
        }
        GitErrorCode::MergeConflicts => {
            "We found some conflicts while trying to merge. Please resolve the conflicts and commit the changes."
        }
        GitErrorCode::HttpsRepositoryNotFound | GitErrorCode::SshRepositoryNotFound => {
            "The repository does not seem to exist anymore. You may not have access, or it may have been deleted or renamed."
        }
        GitErrorCode::PushNotFastForward => {
            "The repository has been updated since you last pulled. Try pulling before pushing."
        }
        GitErrorCode::BranchDeletionFailed => {
            "Could not delete the branch. It was probably already deleted."
        }
        GitErrorCode::DefaultBranchDeletionFailed => {
            "The branch is the repository's default branch and cannot be deleted."
        }
        GitErrorCode::RevertConflicts => {
            "To finish reverting, please merge and commit the changes."
        }
        GitErrorCode::EmptyRebasePatch => "There aren't any changes left to apply.",
        GitErrorCode::NoMatchingRemoteBranch => {
            "There aren't any remote branches that match the current branch."
        }
        GitErrorCode::NothingToCommit => "There are no changes to commit.",
        GitErrorCode::NoSubmoduleMapping => {
            "A submodule was removed from .gitmodules, but the folder still exists in the repository. Delete the folder, commit the change, then try again."
        }
        GitErrorCode::SubmoduleRepositoryDoesNotExist => {
            "A submodule points to a location which does not exist."
        }
        GitErrorCode::InvalidSubmoduleSha => "A submodule points to a commit which does not exist.",
        GitErrorCode::LocalPermissionDenied => "Permission denied.",
        GitErrorCode::InvalidMerge => "This is not something we can merge.",
        GitErrorCode::InvalidRebase => "This is not something we can rebase.",
        GitErrorCode::NonFastForwardMergeIntoEmptyHead => {
            "The merge you attempted is not a fast-forward, so it cannot be performed on an empty branch."
        }
        GitErrorCode::PatchDoesNotApply => {
            "The requested changes conflict with one or more files in the repository."
        }
        GitErrorCode::BranchAlreadyExists => "A branch with that name already exists.",
        GitErrorCode::BadRevision => "Bad revision.",
        GitErrorCode::NotAGitRepository => "This is not a git repository.",
        GitErrorCode::ProtectedBranchForcePush => {
            "This branch is protected from force-push operations."
        }
        GitErrorCode::ProtectedBranchRequiresReview => {
            "This branch is protected and any changes requires an approved review. Open a pull request with changes targeting this branch instead."
        }
        GitErrorCode::PushWithFileSizeExceedingLimit => {
            "The push operation includes a file which exceeds the hosting service's file size restriction of 100MB. Please remove the file from history and try again."
        }
        GitErrorCode::HexBranchNameRejected => {
            "The branch name cannot be a 40-character string of hexadecimal characters, as this is the format that Git uses for representing objects."
        }
        GitErrorCode::ForcePushRejected => {
            "The force push has been rejected for the current branch."
        }
        GitErrorCode::InvalidRefLength => "A ref cannot be longer than 255 characters.",
        GitErrorCode::CannotMergeUnrelatedHistories => {
            "Unable to merge unrelated histories in this repository."
        }
        GitErrorCode::PushWithPrivateEmail => {
            "Cannot push these commits as they contain an email address marked as private. To push anyway, turn off \"Keep my email address private\" in your account's email settings, push your commits, then enable the setting again."
        }
        GitErrorCode::LfsAttributeDoesNotMatch => {
            "Git LFS attribute found in global Git configuration does not match expected value."
        }
        GitErrorCode::ProtectedBranchDeleteRejected => {
            "This branch cannot be deleted from the remote repository because it is marked as protected."
        }
        GitErrorCode::ProtectedBranchRequiredStatus => {
            "The push was rejected by the remote server because a required status check has not been satisfied."
        }
        GitErrorCode::PushWithSecretDetected => {
            "The push was rejected by the remote server because a secret was detected in the commit."
        }
        GitErrorCode::BranchRenameFailed => "The branch could not be renamed.",
        GitErrorCode::PathDoesNotExist => "The path does not exist on disk.",
        GitErrorCode::InvalidObjectName => "The object was not found in the Git repository.",
        GitErrorCode::OutsideRepository => "This path is not a valid path inside the repository.",
        GitErrorCode::LockFileAlreadyExists => {
            "A lock file already exists in the repository, which blocks this operation from completing."
        }
        GitErrorCode::NoMergeToAbort => {
            "There is no merge in progress, so there is nothing to abort."
        }
        GitErrorCode::NoExistingRemoteBranch => "The remote branch does not exist.",
        GitErrorCode::LocalChangesOverwritten => {
            "Unable to switch branches as there are working directory changes which would be overwritten. Please commit or stash your changes."
        }
        GitErrorCode::UnresolvedConflicts => {
            "There are unresolved conflicts in the working directory."
        }
        GitErrorCode::TagAlreadyExists => "A tag with that name already exists",
        // Git's own text is already the clearest message for these.
        GitErrorCode::ConfigLockFileAlreadyExists
        | GitErrorCode::RemoteAlreadyExists
        | GitErrorCode::MergeWithLocalChanges
        | GitErrorCode::RebaseWithLocalChanges
        | GitErrorCode::GpgFailedToSignData
        | GitErrorCode::ConflictModifyDeletedInBranch
        | GitErrorCode::MergeCommitNoMainlineOption
        | GitErrorCode::UnsafeDirectory
        | GitErrorCode::PathExistsButNotInRef => return None,
    };

    Some(text.to_string())
}

#[cfg(test)]
#[path = "describe_tests.rs"]
mod tests;
