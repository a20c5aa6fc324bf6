// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern table mapping git diagnostics to [`GitErrorCode`].
//!
//! Patterns are matched case-sensitively against git's English ("C" locale)
//! output. The table is ordered and the first matching entry wins, so more
//! specific phrasings sit above the generic ones they overlap with (HTTPS
//! authentication above the bare `fatal: Authentication failed`, for one).

use regex::Regex;
use std::sync::LazyLock;

use crate::GitErrorCode;

/// Ordered `(pattern, code)` pairs. Each pair is relied upon by callers that
/// branch on the resulting code, so entries are not reworded casually.
const PATTERNS: &[(&str, GitErrorCode)] = &[
    (
        r"ERROR: ([\s\S]+?)\n+\[EPOLICYKEYAGE\]\n+fatal: Could not read from remote repository.",
        GitErrorCode::SshKeyAuditUnverified,
    ),
    (r"fatal: Authentication failed for 'https://", GitErrorCode::HttpsAuthenticationFailed),
    (r"fatal: Authentication failed", GitErrorCode::SshAuthenticationFailed),
    (r"Permission denied \(publickey\)", GitErrorCode::SshAuthenticationFailed),
    (r"fatal: Could not read from remote repository.", GitErrorCode::SshPermissionDenied),
    (r"The requested URL returned error: 403", GitErrorCode::HttpsAuthenticationFailed),
    (r"fatal: [Tt]he remote end hung up unexpectedly", GitErrorCode::RemoteDisconnection),
    (
        r"fatal: unable to access '(.+)': Failed to connect to (.+): Host is down",
        GitErrorCode::HostDown,
    ),
    (
        r"Cloning into '(.+)'...\nfatal: unable to access '(.+)': Could not resolve host: (.+)",
        GitErrorCode::HostDown,
    ),
    (r"Failed to merge in the changes.", GitErrorCode::RebaseConflicts),
    (
        r"Resolve all conflicts manually, mark them as resolved with",
        GitErrorCode::RebaseConflicts,
    ),
    (
        r"(Merge conflict|Automatic merge failed; fix conflicts and then commit the result.)",
        GitErrorCode::MergeConflicts,
    ),
    (r"fatal: repository '(.+)' not found", GitErrorCode::HttpsRepositoryNotFound),
    (r"ERROR: Repository not found", GitErrorCode::SshRepositoryNotFound),
    (
        r"\((non-fast-forward|fetch first)\)\nerror: failed to push some refs to '.*'",
        GitErrorCode::PushNotFastForward,
    ),
    (
        r"error: unable to delete '(.+)': remote ref does not exist",
        GitErrorCode::BranchDeletionFailed,
    ),
    (
        r"\[remote rejected\] (.+) \(deletion of the current branch prohibited\)",
        GitErrorCode::DefaultBranchDeletionFailed,
    ),
    (
        r"error: could not revert .*\nhint: after resolving the conflicts, mark the corrected paths\nhint: with 'git add <paths>' or 'git rm <paths>'\nhint: and commit the result with 'git commit'",
        GitErrorCode::RevertConflicts,
    ),
    (
        r"Applying: .*\nNo changes - did you forget to use 'git add'\?\nIf there is nothing left to stage, chances are that something else\n.*",
        GitErrorCode::EmptyRebasePatch,
    ),
    (
        r"There are no candidates for (rebasing|merging) among the refs that you just fetched.\nGenerally this means that you provided a wildcard refspec which had no\nmatches on the remote end.",
        GitErrorCode::NoMatchingRemoteBranch,
    ),
    (
        r"Your configuration specifies to merge with the ref '(.+)'\nfrom the remote, but no such ref was fetched.",
        GitErrorCode::NoExistingRemoteBranch,
    ),
    (r"nothing to commit", GitErrorCode::NothingToCommit),
    (
        r"[Nn]o submodule mapping found in .gitmodules for path '(.+)'",
        GitErrorCode::NoSubmoduleMapping,
    ),
    (
        r"fatal: repository '(.+)' does not exist\nfatal: clone of '.+' into submodule path '(.+)' failed",
        GitErrorCode::SubmoduleRepositoryDoesNotExist,
    ),
    (
        r"Fetched in submodule path '(.+)', but it did not contain (.+). Direct fetching of that commit failed.",
        GitErrorCode::InvalidSubmoduleSha,
    ),
    (
        r"fatal: could not create work tree dir '(.+)'.*: Permission denied",
        GitErrorCode::LocalPermissionDenied,
    ),
    (r"merge: (.+) - not something we can merge", GitErrorCode::InvalidMerge),
    (r"invalid upstream (.+)", GitErrorCode::InvalidRebase),
    (
        r"fatal: Non-fast-forward commit does not make sense into an empty head",
        GitErrorCode::NonFastForwardMergeIntoEmptyHead,
    ),
    (
        r"error: (.+): (patch does not apply|already exists in working directory)",
        GitErrorCode::PatchDoesNotApply,
    ),
    (r"fatal: [Aa] branch named '(.+)' already exists.?", GitErrorCode::BranchAlreadyExists),
    (r"fatal: bad revision '(.*)'", GitErrorCode::BadRevision),
    (
        r"fatal: [Nn]ot a git repository \(or any of the parent directories\): (.*)",
        GitErrorCode::NotAGitRepository,
    ),
    (r"fatal: refusing to merge unrelated histories", GitErrorCode::CannotMergeUnrelatedHistories),
    (r"The .+ attribute should be .+ but is .+", GitErrorCode::LfsAttributeDoesNotMatch),
    (r"fatal: Branch rename failed", GitErrorCode::BranchRenameFailed),
    (r"fatal: path '(.+)' does not exist .+", GitErrorCode::PathDoesNotExist),
    (r"fatal: invalid object name '(.+)'.", GitErrorCode::InvalidObjectName),
    (r"fatal: .+: '(.+)' is outside repository", GitErrorCode::OutsideRepository),
    (
        r"Another git process seems to be running in this repository, e.g.",
        GitErrorCode::LockFileAlreadyExists,
    ),
    (r"fatal: There is no merge to abort", GitErrorCode::NoMergeToAbort),
    (
        r"error: (?:Your local changes to the following|The following untracked working tree) files would be overwritten by checkout:",
        GitErrorCode::LocalChangesOverwritten,
    ),
    (
        r"You must edit all merge conflicts and then\nmark them as resolved using git add|fatal: Exiting because of an unresolved conflict",
        GitErrorCode::UnresolvedConflicts,
    ),
    (r"error: gpg failed to sign the data", GitErrorCode::GpgFailedToSignData),
    (
        r"CONFLICT \(modify/delete\): (.+) deleted in (.+) and modified in (.+)",
        GitErrorCode::ConflictModifyDeletedInBranch,
    ),
    // Hosting-service (GitHub) push rejections.
    (r"error: GH001: ", GitErrorCode::PushWithFileSizeExceedingLimit),
    (r"error: GH002: ", GitErrorCode::HexBranchNameRejected),
    (
        r"error: GH003: Sorry, force-pushing to (.+) is not allowed.",
        GitErrorCode::ForcePushRejected,
    ),
    (
        r"error: GH005: Sorry, refs longer than (.+) bytes are not allowed",
        GitErrorCode::InvalidRefLength,
    ),
    (
        r"error: GH006: Protected branch update failed for (.+)\nremote: error: At least one approved review is required",
        GitErrorCode::ProtectedBranchRequiresReview,
    ),
    (
        r"error: GH006: Protected branch update failed for (.+)\nremote: error: Cannot force-push to a protected branch",
        GitErrorCode::ProtectedBranchForcePush,
    ),
    (
        r"error: GH006: Protected branch update failed for (.+)\nremote: error: Cannot delete a protected branch",
        GitErrorCode::ProtectedBranchDeleteRejected,
    ),
    (
        r#"error: GH006: Protected branch update failed for (.+).\nremote: error: Required status check "(.+)" is expected"#,
        GitErrorCode::ProtectedBranchRequiredStatus,
    ),
    (
        r"error: GH007: Your push would publish a private email address.",
        GitErrorCode::PushWithPrivateEmail,
    ),
    (r"GH013: Repository rule violations found for (.+)", GitErrorCode::PushWithSecretDetected),
    (CONFIG_LOCK_PATTERN, GitErrorCode::ConfigLockFileAlreadyExists),
    (r"error: remote (.+) already exists.", GitErrorCode::RemoteAlreadyExists),
    (r"fatal: tag '(.+)' already exists", GitErrorCode::TagAlreadyExists),
    (
        r"error: Your local changes to the following files would be overwritten by merge:\n",
        GitErrorCode::MergeWithLocalChanges,
    ),
    (
        r"error: cannot (pull with rebase|rebase): You have unstaged changes\.\n\s*error: [Pp]lease commit or stash them\.",
        GitErrorCode::RebaseWithLocalChanges,
    ),
    (
        r"error: commit (.+) is a merge but no -m option was given",
        GitErrorCode::MergeCommitNoMainlineOption,
    ),
    (r"fatal: detected dubious ownership in repository at (.+)", GitErrorCode::UnsafeDirectory),
    (
        r"fatal: path '(.+)' exists on disk, but not in '(.+)'",
        GitErrorCode::PathExistsButNotInRef,
    ),
    (BAD_CONFIG_VALUE_PATTERN, GitErrorCode::BadConfigValue),
];

/// Shared with [`crate::parse_config_lock_file_path`].
pub(crate) const CONFIG_LOCK_PATTERN: &str = r"error: could not lock config file (.+): File exists";

/// Shared with [`crate::parse_bad_config_value`].
pub(crate) const BAD_CONFIG_VALUE_PATTERN: &str =
    r"fatal: bad (?:numeric|boolean) config value '(.+)' for '(.+)'";

// Allow expect here as every pattern is a compile-time constant covered by tests
#[allow(clippy::expect_used)]
static TABLE: LazyLock<Vec<(Regex, GitErrorCode)>> = LazyLock::new(|| {
    PATTERNS
        .iter()
        .map(|(pattern, code)| {
            (Regex::new(pattern).expect("constant regex pattern is valid"), *code)
        })
        .collect()
});

/// Classify a block of git output.
///
/// Returns the code of the first table entry that matches anywhere in
/// `text`, or `None` when git's message is not one we recognize.
pub fn classify(text: &str) -> Option<GitErrorCode> {
    TABLE.iter().find(|(regex, _)| regex.is_match(text)).map(|(_, code)| *code)
}

/// Classify a finished command: stderr first, then stdout.
///
/// Some commands (`commit` with nothing staged, for one) report their
/// failure on stdout, so stdout is consulted only when stderr yields nothing.
pub fn classify_output(stderr: &str, stdout: &str) -> Option<GitErrorCode> {
    classify(stderr).or_else(|| classify(stdout))
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
