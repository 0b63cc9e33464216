mod checkout_branch_guards_untracked_files;
mod checkout_errors;
mod checkout_file_from_commit_prefix;
mod checkout_file_restores_the_head_version;
