// Tag normalization: alias table lookup with verbatim pass-through.
use std::collections::HashMap;

/// Lowercases and trims a raw tag, producing its lookup key.
/// Internal whitespace and punctuation are left alone.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Alias -> canonical display name. Keys are stored normalized; many aliases
/// may point at the same canonical label.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    entries: HashMap<String, String>,
}

impl SynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table = Self::new();
        for (alias, canonical) in entries {
            table.insert(alias, canonical);
        }
        table
    }

    /// Adds one alias. The alias is normalized on the way in, so callers can
    /// pass any casing.
    pub fn insert(&mut self, alias: &str, canonical: &str) {
        self.entries.insert(normalize_key(alias), canonical.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The built-in table for DevOps job postings, grouped by domain.
    pub fn builtin() -> Self {
        Self::from_entries([
            // Cloud
            ("aws", "AWS"),
            ("amazon web services", "AWS"),
            ("amazon eks", "Kubernetes"),
            ("eks", "Kubernetes"),
            ("azure", "Azure"),
            ("microsoft azure", "Azure"),
            ("azure cloud", "Azure"),
            ("aks", "Kubernetes"),
            ("azure kubernetes service", "Kubernetes"),
            ("gcp", "GCP"),
            ("google cloud", "GCP"),
            ("google cloud platform", "GCP"),
            ("gke", "Kubernetes"),
            ("oci", "Oracle Cloud"),
            // Containerization and orchestration
            ("k8s", "Kubernetes"),
            ("kubernetes", "Kubernetes"),
            ("docker", "Docker"),
            ("docker compose", "Docker"),
            ("helm", "Helm"),
            ("helm charts", "Helm"),
            ("openshift", "OpenShift"),
            // Infrastructure as Code
            ("iac", "Infrastructure as Code"),
            ("infrastructure as code", "Infrastructure as Code"),
            ("infrastructure as a code", "Infrastructure as Code"),
            ("terraform", "Terraform"),
            ("ansible", "Ansible"),
            ("cloudformation", "CloudFormation"),
            ("aws cloudformation", "CloudFormation"),
            ("bicep", "Bicep"),
            ("pulumi", "Pulumi"),
            // CI/CD
            ("ci/cd", "CI/CD"),
            ("ci cd", "CI/CD"),
            ("ci/cd pipelines", "CI/CD"),
            ("ci cd pipelines", "CI/CD"),
            ("github actions", "GitHub Actions"),
            ("jenkins", "Jenkins"),
            ("gitlab ci", "GitLab CI"),
            ("gitlab ci/cd", "GitLab CI"),
            ("argocd", "ArgoCD"),
            ("argo cd", "ArgoCD"),
            // Languages and scripting
            ("python", "Python"),
            ("golang", "Go"),
            ("go", "Go"),
            ("bash", "Bash"),
            ("shell", "Bash"),
            ("bash script", "Bash"),
            ("powershell", "PowerShell"),
            ("groovy", "Groovy"),
            // Monitoring and logs
            ("prometheus", "Prometheus"),
            ("grafana", "Grafana"),
            ("elk stack", "ELK Stack"),
            ("elk", "ELK Stack"),
            ("kibana", "ELK Stack"),
            ("splunk", "Splunk"),
            ("datadog", "Datadog"),
            // Network and others
            ("networking", "Networking"),
            ("network protocols", "Networking"),
            ("security", "Security"),
            ("cybersecurity", "Security"),
            ("git", "Git"),
            ("version control system", "Git"),
        ])
    }
}

/// Maps raw scraped tags to canonical labels using an injected synonym table.
pub struct Resolver {
    table: SynonymTable,
}

impl Resolver {
    pub fn new(table: SynonymTable) -> Self {
        Self { table }
    }

    /// Resolves one raw tag. A tag whose normalized key is unknown to the
    /// table passes through verbatim, original casing and spacing kept.
    pub fn resolve<'a>(&'a self, raw: &'a str) -> &'a str {
        match self.table.get(&normalize_key(raw)) {
            Some(canonical) => canonical,
            None => raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin_resolver() -> Resolver {
        Resolver::new(SynonymTable::builtin())
    }

    #[test]
    fn normalize_key_lowercases_and_trims() {
        assert_eq!(normalize_key("  AWS "), "aws");
        assert_eq!(normalize_key("Docker Compose"), "docker compose");
        // internal whitespace is not collapsed
        assert_eq!(normalize_key("ci  cd"), "ci  cd");
        assert_eq!(normalize_key(""), "");
    }

    #[test]
    fn resolves_aliases_regardless_of_casing() {
        let resolver = builtin_resolver();
        assert_eq!(resolver.resolve("AWS"), "AWS");
        assert_eq!(resolver.resolve("aws"), "AWS");
        assert_eq!(resolver.resolve("Amazon Web Services"), "AWS");
        assert_eq!(resolver.resolve("  terraform  "), "Terraform");
    }

    #[test]
    fn managed_kubernetes_flavours_converge() {
        let resolver = builtin_resolver();
        for raw in ["k8s", "EKS", "AKS", "GKE", "Amazon EKS", "Azure Kubernetes Service"] {
            assert_eq!(resolver.resolve(raw), "Kubernetes", "raw tag {:?}", raw);
        }
    }

    #[test]
    fn unknown_tags_pass_through_verbatim() {
        let resolver = builtin_resolver();
        assert_eq!(resolver.resolve("Rust"), "Rust");
        assert_eq!(resolver.resolve("  Rust"), "  Rust");
        assert_eq!(resolver.resolve(""), "");
    }

    #[test]
    fn resolution_is_deterministic() {
        let resolver = builtin_resolver();
        assert_eq!(resolver.resolve("gitlab ci/cd"), resolver.resolve("gitlab ci/cd"));
    }

    #[test]
    fn custom_table_is_injectable() {
        let mut table = SynonymTable::new();
        assert!(table.is_empty());
        table.insert("RS", "Rust");
        assert_eq!(table.len(), 1);
        let resolver = Resolver::new(table);
        assert_eq!(resolver.resolve("rs"), "Rust");
        // builtin aliases are absent from the custom table
        assert_eq!(resolver.resolve("aws"), "aws");
    }
}
