// file: src/pcs/command.rs
// version: 1.0.0
// guid: c7c7b0cc-67ff-4b86-8ccd-2afd3bc1087d

//! Argument vectors for pcs resource commands

use crate::config::ResourceSpec;

/// A pcs invocation, arguments only; the binary is supplied by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcsCommand {
    args: Vec<String>,
}

impl PcsCommand {
    fn resource(subcommand: &str, name: &str) -> Self {
        Self {
            args: vec!["resource".to_string(), subcommand.to_string(), name.to_string()],
        }
    }

    /// `pcs resource config NAME`
    pub fn config(name: &str) -> Self {
        Self::resource("config", name)
    }

    /// `pcs resource create NAME AGENT [options] [op ..] [meta ..] [clone ..] [promotable ..] [--group G] [--disabled] [--agent-validation]`
    pub fn create(name: &str, spec: &ResourceSpec) -> Self {
        let mut cmd = Self::resource("create", name);
        cmd.push(spec.agent());
        cmd.push_words(spec.resource_options.as_deref());
        cmd.push_section("op", spec.operations.as_deref());
        cmd.push_section("meta", spec.meta.as_deref());
        cmd.push_section("clone", spec.clone.as_deref());
        cmd.push_section("promotable", spec.promotable.as_deref());
        if let Some(group) = non_empty(spec.group.as_deref()) {
            cmd.push("--group");
            cmd.push(group);
        }
        if spec.disabled {
            cmd.push("--disabled");
        }
        if spec.agent_validation {
            cmd.push("--agent-validation");
        }
        cmd
    }

    /// `pcs resource update NAME [options] [op ..] [meta ..] [--agent-validation]`
    ///
    /// pcs cannot change the agent, group or clone wrapping of an existing
    /// resource through `update`, so those fields are not passed.
    pub fn update(name: &str, spec: &ResourceSpec) -> Self {
        let mut cmd = Self::resource("update", name);
        cmd.push_words(spec.resource_options.as_deref());
        cmd.push_section("op", spec.operations.as_deref());
        cmd.push_section("meta", spec.meta.as_deref());
        if spec.agent_validation {
            cmd.push("--agent-validation");
        }
        cmd
    }

    /// `pcs resource delete NAME [--force]`
    pub fn delete(name: &str, force: bool) -> Self {
        let mut cmd = Self::resource("delete", name);
        if force {
            cmd.push("--force");
        }
        cmd
    }

    /// `pcs resource move NAME NODE [--wait=SECONDS]`
    pub fn relocate(name: &str, node: &str, wait_seconds: Option<u64>) -> Self {
        let mut cmd = Self::resource("move", name);
        cmd.push(node);
        if let Some(wait) = wait_seconds {
            cmd.push(format!("--wait={}", wait));
        }
        cmd
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn push(&mut self, arg: impl Into<String>) {
        self.args.push(arg.into());
    }

    fn push_words(&mut self, words: Option<&str>) {
        if let Some(words) = words {
            self.args.extend(words.split_whitespace().map(str::to_string));
        }
    }

    fn push_section(&mut self, keyword: &str, words: Option<&str>) {
        if let Some(words) = non_empty(words) {
            self.push(keyword);
            self.push_words(Some(words));
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(cmd: &PcsCommand) -> String {
        cmd.args().join(" ")
    }

    #[test]
    fn test_config() {
        assert_eq!(joined(&PcsCommand::config("vip")), "resource config vip");
    }

    #[test]
    fn test_create_minimal() {
        let spec = ResourceSpec::new("Dummy");

        assert_eq!(
            joined(&PcsCommand::create("dummy", &spec)),
            "resource create dummy ocf:heartbeat:Dummy"
        );
    }

    #[test]
    fn test_create_full() {
        // Arrange
        let mut spec = ResourceSpec::new("IPaddr2");
        spec.resource_options = Some("ip=172.31.40.87  cidr_netmask=24".to_string());
        spec.operations = Some("monitor interval=10s".to_string());
        spec.meta = Some("target-role=Stopped".to_string());
        spec.group = Some("webservergroup".to_string());
        spec.disabled = true;
        spec.agent_validation = true;

        // Act
        let cmd = PcsCommand::create("floatingVIP", &spec);

        // Assert
        assert_eq!(
            cmd.args(),
            [
                "resource",
                "create",
                "floatingVIP",
                "ocf:heartbeat:IPaddr2",
                "ip=172.31.40.87",
                "cidr_netmask=24",
                "op",
                "monitor",
                "interval=10s",
                "meta",
                "target-role=Stopped",
                "--group",
                "webservergroup",
                "--disabled",
                "--agent-validation",
            ]
        );
    }

    #[test]
    fn test_create_skips_blank_sections() {
        let mut spec = ResourceSpec::new("apache");
        spec.operations = Some("   ".to_string());
        spec.clone = Some("clone-max=2".to_string());
        spec.group = Some(String::new());

        assert_eq!(
            joined(&PcsCommand::create("web", &spec)),
            "resource create web ocf:heartbeat:apache clone clone-max=2"
        );
    }

    #[test]
    fn test_update_omits_agent_and_grouping() {
        let mut spec = ResourceSpec::new("IPaddr2");
        spec.resource_options = Some("ip=10.0.0.9".to_string());
        spec.group = Some("web".to_string());
        spec.promotable = Some("notify=true".to_string());
        spec.disabled = true;

        assert_eq!(
            joined(&PcsCommand::update("vip", &spec)),
            "resource update vip ip=10.0.0.9"
        );
    }

    #[test]
    fn test_delete() {
        assert_eq!(joined(&PcsCommand::delete("vip", false)), "resource delete vip");
        assert_eq!(
            joined(&PcsCommand::delete("vip", true)),
            "resource delete vip --force"
        );
    }

    #[test]
    fn test_relocate() {
        assert_eq!(
            joined(&PcsCommand::relocate("vip", "node2", Some(300))),
            "resource move vip node2 --wait=300"
        );
        assert_eq!(
            joined(&PcsCommand::relocate("vip", "node2", None)),
            "resource move vip node2"
        );
    }
}
