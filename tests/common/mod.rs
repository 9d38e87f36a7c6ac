use assert_cmd::Command;

pub fn kustag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("kustag").unwrap();
    cmd.env_remove("KUSTAG_MANIFEST");
    cmd
}
