//! Static catalog of provisioning script templates, one per ecosystem.

use crate::domain::ecosystem::Ecosystem;

/// Render the provisioning script for `ecosystem`, substituting the project
/// name into the path expressions. Deterministic: same inputs, same bytes.
#[must_use]
pub fn render(ecosystem: Ecosystem, project_name: &str) -> String {
    match ecosystem {
        Ecosystem::Python => python(project_name),
    }
}

/// The script announces each step itself so progress is visible inside the
/// instance, where it runs.
fn python(project_name: &str) -> String {
    let statements = [
        "#!/usr/bin/env bash".to_owned(),
        r#"echo "Executing: sudo apt-get update""#.to_owned(),
        "sudo apt-get update".to_owned(),
        r#"echo "Executing: sudo apt-get upgrade -y""#.to_owned(),
        "sudo apt-get upgrade -y".to_owned(),
        r#"echo "Executing: sudo apt-get install python3 python3-pip python3-venv -y""#.to_owned(),
        "sudo apt-get install python3 python3-pip python3-venv -y".to_owned(),
        r#"echo "Creating the venv...""#.to_owned(),
        format!("python3 -m venv ./{project_name}/venv"),
        r#"echo "Activating the venv...""#.to_owned(),
        format!("source ./{project_name}/venv/bin/activate"),
        r#"echo "Installing requirements...""#.to_owned(),
        format!("pip3 install -r ./{project_name}/requirements.txt"),
    ];
    let mut contents = statements.join("\n");
    contents.push('\n');
    contents
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_script_references_the_project_paths() {
        let contents = render(Ecosystem::Python, "myproj");
        assert!(contents.contains("python3 -m venv ./myproj/venv"));
        assert!(contents.contains("pip3 install -r ./myproj/requirements.txt"));
        assert!(contents.contains("source ./myproj/venv/bin/activate"));
    }

    #[test]
    fn python_script_starts_with_a_shebang_and_updates_packages() {
        let contents = render(Ecosystem::Python, "myproj");
        assert!(contents.starts_with("#!/usr/bin/env bash\n"));
        assert!(contents.contains("sudo apt-get update"));
        assert!(contents.contains("sudo apt-get upgrade -y"));
        assert!(contents.contains("sudo apt-get install python3 python3-pip python3-venv -y"));
    }

    #[test]
    fn each_step_is_announced_inside_the_script() {
        let contents = render(Ecosystem::Python, "myproj");
        assert!(contents.contains(r#"echo "Creating the venv...""#));
        assert!(contents.contains(r#"echo "Installing requirements...""#));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(
            render(Ecosystem::Python, "myproj"),
            render(Ecosystem::Python, "myproj")
        );
    }
}
