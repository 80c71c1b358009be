use super::database::ComponentDatabase;

/// One placed component instance as tracked by the editor session.
///
/// The uid is permanently unique within a session; the name is unique among
/// all live instances but may be reused after a rename frees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentInstanceRecord {
    pub uid: String,
    pub name: String,
    pub type_name: String,
}

impl ComponentDatabase {
    /// Registers an instance. Returns false (and changes nothing) when the
    /// uid is already taken.
    pub fn add_instance(&mut self, uid: &str, name: &str, type_name: &str) -> bool {
        if self.instances.contains_key(uid) {
            return false;
        }
        self.name_index.insert(name.to_string(), uid.to_string());
        self.instances.insert(
            uid.to_string(),
            ComponentInstanceRecord {
                uid: uid.to_string(),
                name: name.to_string(),
                type_name: type_name.to_string(),
            },
        );
        true
    }

    pub fn has_instance(&self, uid: &str) -> bool {
        self.instances.contains_key(uid)
    }

    pub fn get_instance(&self, uid: &str) -> Option<&ComponentInstanceRecord> {
        self.instances.get(uid)
    }

    pub fn get_instance_by_name(&self, name: &str) -> Option<&ComponentInstanceRecord> {
        self.name_index
            .get(name)
            .and_then(|uid| self.instances.get(uid))
    }

    /// Renames the instance with the given uid. A no-op returning false when
    /// the uid is unknown or the name does not actually change.
    pub fn rename_instance(&mut self, uid: &str, new_name: &str) -> bool {
        let Some(record) = self.instances.get_mut(uid) else {
            return false;
        };
        if record.name == new_name {
            return false;
        }
        let old_name = std::mem::replace(&mut record.name, new_name.to_string());
        self.name_index.remove(&old_name);
        self.name_index.insert(new_name.to_string(), uid.to_string());
        true
    }

    /// Removes the instance with the given uid, returning whether it existed.
    pub fn remove_instance(&mut self, uid: &str) -> bool {
        match self.instances.remove(uid) {
            Some(record) => {
                self.name_index.remove(&record.name);
                true
            }
            None => false,
        }
    }

    pub fn for_each_instance(&self, mut f: impl FnMut(&ComponentInstanceRecord)) {
        for record in self.instances.values() {
            f(record);
        }
    }

    /// Current names of all instances of the given type, sorted for a stable
    /// presentation order.
    pub fn get_component_names_by_type(&self, type_name: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .instances
            .values()
            .filter(|r| r.type_name == type_name)
            .map(|r| r.name.clone())
            .collect();
        names.sort();
        names
    }
}
