//! One page per entity: the fetched list plus the shared create/edit form.
//!
//! The page never patches its list locally. Every successful mutation is
//! followed by a full refetch.

use serde_json::{Map, Value};

use crate::client::ApiClient;
use crate::entities::EntityKind;
use crate::error::{CliError, CliResult};
use crate::forms::{FieldKind, build_body};
use crate::prompt::Prompter;

const ACTIONS: [&str; 5] = ["Create", "Edit", "Delete", "Refresh", "Back"];

pub struct EntityPage<'a> {
    client: &'a ApiClient,
    kind: EntityKind,
    records: Vec<Value>,
    editing: Option<String>,
}

fn record_id(record: &Value) -> Option<&str> {
    record.get("_id").and_then(Value::as_str)
}

impl<'a> EntityPage<'a> {
    /// Opens the page and fetches the full list.
    pub async fn open(client: &'a ApiClient, kind: EntityKind) -> CliResult<Self> {
        let mut page = Self {
            client,
            kind,
            records: Vec::new(),
            editing: None,
        };
        page.refresh().await?;
        Ok(page)
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn records(&self) -> &[Value] {
        &self.records
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub async fn refresh(&mut self) -> CliResult<()> {
        self.records = self.client.fetch_all(self.kind.segment()).await?;
        Ok(())
    }

    fn find(&self, id: &str) -> Option<&Value> {
        self.records.iter().find(|record| record_id(record) == Some(id))
    }

    /// Puts the form in edit mode for `id`.
    pub fn start_edit(&mut self, id: &str) -> CliResult<()> {
        if self.find(id).is_none() {
            return Err(CliError::UnknownRecord {
                label: self.kind.label(),
                id: id.to_string(),
            });
        }
        self.editing = Some(id.to_string());
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// The list as a plain-text table: id followed by each form field.
    pub fn render(&self) -> String {
        let fields: Vec<_> = self
            .kind
            .fields()
            .iter()
            .filter(|field| field.kind != FieldKind::Password)
            .collect();

        let mut out = format!("{} ({})\n", self.kind.label(), self.records.len());
        if self.records.is_empty() {
            out.push_str("  No records yet.\n");
            return out;
        }

        for (index, record) in self.records.iter().enumerate() {
            let marker = if record_id(record).is_some() && record_id(record) == self.editing() {
                '*'
            } else {
                ' '
            };
            let values: Vec<_> = fields
                .iter()
                .map(|field| format!("{}: {}", field.label, field.display(record.get(field.name))))
                .collect();
            out.push_str(&format!(
                "{}{:>3}. {}  {}\n",
                marker,
                index + 1,
                record_id(record).unwrap_or("-"),
                values.join(" | ")
            ));
        }
        out
    }

    /// Prompts for every field, prefilled from the record being edited.
    fn fill_form(&self, prompter: &mut dyn Prompter) -> CliResult<Map<String, Value>> {
        let current = self.editing.as_deref().and_then(|id| self.find(id));

        let mut answers = Vec::with_capacity(self.kind.fields().len());
        for field in self.kind.fields() {
            let initial = field.display(current.and_then(|record| record.get(field.name)));
            let answer = match field.kind {
                FieldKind::Password if current.is_some() => {
                    prompter.password(&format!("{} (leave blank to keep)", field.label))?
                }
                FieldKind::Password => prompter.password(field.label)?,
                FieldKind::Choice(options) => {
                    let default = options.iter().position(|o| *o == initial).unwrap_or(0);
                    let index = prompter.select(field.label, options, default)?;
                    options.get(index).copied().unwrap_or_default().to_string()
                }
                _ => prompter.input(&field.prompt(), &initial)?,
            };
            answers.push((field, answer));
        }

        build_body(answers).map_err(CliError::Validation)
    }

    /// Submits the form: creates a record, or updates the one being edited.
    /// On success the list is refetched and edit mode ends.
    pub async fn submit(&mut self, prompter: &mut dyn Prompter) -> CliResult<String> {
        let body = self.fill_form(prompter)?;
        let editing = self.editing.clone();

        self.kind
            .validate(&body, editing.is_some())
            .map_err(CliError::Validation)?;

        let body = Value::Object(body);
        let envelope = match &editing {
            Some(id) => self.client.update(self.kind.segment(), id, &body).await?,
            None => self.client.create(self.kind.segment(), &body).await?,
        };

        self.editing = None;
        self.refresh().await?;

        Ok(envelope.message.unwrap_or_else(|| "Saved".to_string()))
    }

    /// Deletes `id` after the operator confirms. Returns `None` when declined.
    pub async fn remove(&mut self, id: &str, prompter: &mut dyn Prompter) -> CliResult<Option<String>> {
        if self.find(id).is_none() {
            return Err(CliError::UnknownRecord {
                label: self.kind.label(),
                id: id.to_string(),
            });
        }

        if !prompter.confirm(&format!("Delete {} {}?", self.kind.label(), id))? {
            return Ok(None);
        }

        let message = self.client.delete(self.kind.segment(), id).await?;
        if self.editing.as_deref() == Some(id) {
            self.editing = None;
        }
        self.refresh().await?;

        Ok(Some(message))
    }

    fn choose_record(&self, prompter: &mut dyn Prompter, action: &str) -> CliResult<Option<String>> {
        if self.records.is_empty() {
            return Ok(None);
        }
        let ids: Vec<&str> = self.records.iter().filter_map(record_id).collect();
        let index = prompter.select(&format!("{} which {}?", action, self.kind.label()), &ids, 0)?;
        Ok(ids.get(index).map(|id| id.to_string()))
    }

    /// Interactive loop. Failures are printed as one-line notices and the
    /// page stays open.
    pub async fn run(&mut self, prompter: &mut dyn Prompter) -> CliResult<()> {
        loop {
            println!("\n{}", self.render());

            let outcome = match prompter.select("Action", &ACTIONS, 0)? {
                0 => {
                    self.cancel_edit();
                    self.submit(prompter).await.map(Some)
                }
                1 => match self.choose_record(prompter, "Edit")? {
                    Some(id) => {
                        self.start_edit(&id)?;
                        let result = self.submit(prompter).await.map(Some);
                        if result.is_err() {
                            self.cancel_edit();
                        }
                        result
                    }
                    None => Ok(None),
                },
                2 => match self.choose_record(prompter, "Delete")? {
                    Some(id) => self.remove(&id, prompter).await,
                    None => Ok(None),
                },
                3 => self.refresh().await.map(|_| None),
                _ => return Ok(()),
            };

            match outcome {
                Ok(Some(message)) => println!("✅ {}", message),
                Ok(None) => {}
                Err(e @ CliError::ScriptExhausted(_)) => return Err(e),
                Err(e) => eprintln!("❌ {}", e),
            }
        }
    }
}
