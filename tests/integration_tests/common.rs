// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub const PY_HEADER: &str = "# Copyright 2020 The Authors\n#\n# Licensed under the Apache License, Version 2.0\n";
pub const GO_HEADER: &str = "/*\nCopyright 2020 The Authors\n\nLicensed under the Apache License, Version 2.0\n*/\n";
pub const HASH_HEADER: &str = "# Copyright 2020 The Authors\n";

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn create_boilerplate(dir: &Path) -> Result<()> {
    let bp = dir.join("hack/boilerplate");
    create_test_file(&bp, "boilerplate.py.txt", PY_HEADER)?;
    create_test_file(&bp, "boilerplate.go.txt", GO_HEADER)?;
    create_test_file(&bp, "boilerplate.go.preamble", "// +build")?;
    create_test_file(&bp, "boilerplate.sh.txt", HASH_HEADER)?;
    create_test_file(&bp, "boilerplate.sh.preamble", "#!/usr/bin/env bash\n")?;
    create_test_file(&bp, "boilerplate.Dockerfile.txt", HASH_HEADER)?;
    create_test_file(&bp, "boilerplate.Makefile.txt", HASH_HEADER)?;
    Ok(())
}

pub fn setup_test_repo() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    create_boilerplate(root)?;

    create_test_file(root, "main.py", &format!("{PY_HEADER}\nimport os\n"))?;
    create_test_file(
        root,
        "pkg/good.go",
        &format!("// +build linux\n\n{GO_HEADER}\npackage pkg\n"),
    )?;
    create_test_file(
        root,
        "pkg/bad.go",
        &GO_HEADER.replace("The Authors", "The Wrong Authors"),
    )?;
    create_test_file(root, "hack/build.sh", &format!("#!/usr/bin/env bash\n{HASH_HEADER}"))?;
    create_test_file(root, "Makefile", &format!("{HASH_HEADER}\nall:\n\ttrue\n"))?;
    create_test_file(root, "build/Dockerfile", "FROM scratch\n")?;
    create_test_file(root, "README.md", "# Readme\n")?;
    create_test_file(root, "vendor/github.com/dep/dep.go", "package dep\n")?;
    create_test_file(root, "third_party/lib.py", "print('x')\n")?;
    create_test_file(root, "pkg/__init__.py", "")?;

    Ok(temp_dir)
}
