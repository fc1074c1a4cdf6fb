//! AIDL File Emitter
//!
//! Generates one `.aidl` file per declaration.
//!
//! ```text
//! // IFoo.hal (android.hardware.foo@1.1, extends @1.0::IFoo)
//! interface IFoo extends @1.0::IFoo {
//!     getValue_1_1() generates (Status status, int32_t value);
//! };
//! ```
//!
//! Generates:
//!
//! ```text
//! // FIXME: license file if you have one
//!
//! package android.hardware.foo;
//!
//! import android.hardware.foo.Status;
//!
//! // Interface inherits from android.hardware.foo@1.0::IFoo but AIDL does not support interface inheritance.
//! interface IFoo {
//!     // Ignoring method getValue since a newer alternative is available.
//!
//!     // Ignoring result android.hardware.foo.Status status since AIDL has built in status types.
//!     // Changing method name from getValue_1_1 to getValue
//!     // Adding return type to method instead of out param int value since there is only one return value.
//!     int getValue();
//! }
//! ```
//!
//! Nested declarations are emitted first, each to its own file, and are
//! imported by the enclosing declaration.

use std::io::Write;
use std::path::{Path, PathBuf};

use hidl2aidl_ast::{Ast, CompoundKind, CompoundType, DeclId, Declaration, FqName, Interface};

use crate::doc_sync::sync_doc_comment;
use crate::error::EmitError;
use crate::method_merger::{MergedMethod, merge_methods};
use crate::names::{ImportSet, aidl_fq_name, aidl_name, aidl_package, aidl_relative_path};
use crate::options::EmitOptions;
use crate::output::OutputProvider;
use crate::result_transform::SignaturePlan;
use crate::source_writer::SourceWriter;
use crate::type_mapper::TypeMapper;
use crate::wrapped_printer::WrappedLinePrinter;

/// The text of one output unit and the conversion notes it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub fq_name: FqName,
    pub relative_path: PathBuf,
    pub text: String,
    pub notes: Vec<String>,
}

pub struct AidlEmitter<'a> {
    ast: &'a Ast,
    options: &'a EmitOptions,
    output: &'a dyn OutputProvider,
    /// Conversion log, one line per note.
    notes: &'a mut dyn Write,
    mapper: TypeMapper<'a>,
}

impl<'a> AidlEmitter<'a> {
    pub fn new(
        ast: &'a Ast,
        options: &'a EmitOptions,
        output: &'a dyn OutputProvider,
        notes: &'a mut dyn Write,
    ) -> Self {
        AidlEmitter {
            ast,
            options,
            output,
            notes,
            mapper: TypeMapper::new(ast),
        }
    }

    /// Emit `id` and everything nested in it.
    ///
    /// Returns the relative paths written, nested declarations first.
    pub fn emit(&mut self, id: DeclId) -> Result<Vec<PathBuf>, EmitError> {
        let mut written = Vec::new();
        self.emit_into(id, &mut written)?;
        Ok(written)
    }

    fn emit_into(&mut self, id: DeclId, written: &mut Vec<PathBuf>) -> Result<(), EmitError> {
        let decl = self.ast.get(id);
        let _span = tracing::info_span!("emit_declaration", fq_name = %decl.fq_name()).entered();

        for &sub_type in decl.sub_types() {
            self.emit_into(sub_type, written)?;
        }

        let rendered = self.render(id);
        self.write_file(&rendered.fq_name, &rendered.relative_path, &rendered.text)?;
        for note in &rendered.notes {
            writeln!(self.notes, "{note}").map_err(EmitError::Notes)?;
        }
        tracing::debug!(path = %rendered.relative_path.display(), "wrote aidl file");
        written.push(rendered.relative_path);
        Ok(())
    }

    fn write_file(&self, fq_name: &FqName, path: &Path, text: &str) -> Result<(), EmitError> {
        let to_error = |source| EmitError::Output {
            fq_name: fq_name.clone(),
            path: path.to_path_buf(),
            source,
        };
        let mut sink = self.output.open(fq_name, path).map_err(to_error)?;
        sink.write_all(text.as_bytes()).map_err(to_error)?;
        sink.flush().map_err(to_error)
    }

    /// Render one declaration without its nested declarations.
    pub fn render(&self, id: DeclId) -> RenderedFile {
        let decl = self.ast.get(id);
        let mut writer = SourceWriter::with_capacity(4096, self.options.indent_width);
        let mut notes = vec![format!(
            "Converted {} to {}",
            decl.fq_name(),
            aidl_fq_name(decl.fq_name())
        )];

        if let Some(iface) = decl.as_interface() {
            self.render_interface(id, decl, iface, &mut writer, &mut notes);
        } else if let Some(compound) = decl.as_compound() {
            self.render_compound(id, decl, compound, &mut writer);
        }

        RenderedFile {
            fq_name: decl.fq_name().clone(),
            relative_path: aidl_relative_path(decl.fq_name()),
            text: writer.finish(),
            notes,
        }
    }

    fn write_header(&self, writer: &mut SourceWriter, decl: &Declaration, imports: &ImportSet) {
        if !self.options.header_comment.is_empty() {
            writer.line(&self.options.header_comment);
            writer.write_line();
        }

        writer.line(&format!("package {};", aidl_package(decl.fq_name())));
        writer.write_line();

        let lines = imports.render();
        for line in &lines {
            writer.line(line);
        }
        if !lines.is_empty() {
            writer.write_line();
        }

        if let Some(doc) = decl.doc_comment() {
            for line in doc.render() {
                writer.line(&line);
            }
        }
    }

    fn render_interface(
        &self,
        id: DeclId,
        decl: &Declaration,
        iface: &Interface,
        writer: &mut SourceWriter,
        notes: &mut Vec<String>,
    ) {
        let merged = merge_methods(self.ast, id);
        let imports = ImportSet::for_declaration(self.ast, id, Some(&merged));
        self.write_header(writer, decl, &imports);

        if let Some(super_type) = iface.super_type()
            && super_type != self.ast.base()
        {
            writer.line(&format!(
                "// Interface inherits from {} but AIDL does not support interface inheritance.",
                self.ast.get(super_type).fq_name()
            ));
        }
        if merged.mixes_oneway() {
            writer.line(
                "// Interface mixes oneway and blocking methods; AIDL cannot mark the whole interface oneway.",
            );
        }

        writer.line(&format!("interface {} {{", aidl_name(decl.fq_name())));
        writer.increase_indent();

        for ignored in &merged.ignored {
            writer.line(&format!(
                "// Ignoring method {} since a newer alternative is available.",
                ignored.method.name()
            ));
            notes.push(format!(
                "{}: ignoring {} from {}",
                aidl_fq_name(decl.fq_name()),
                ignored.method.name(),
                self.ast.get(ignored.declared_in).fq_name()
            ));
        }
        if !merged.ignored.is_empty() {
            writer.write_line();
        }

        for (index, method) in merged.methods.values().enumerate() {
            if index > 0 {
                writer.write_line();
            }
            self.write_method(writer, decl, method, notes);
        }

        writer.decrease_indent();
        writer.line("}");
    }

    fn write_method(
        &self,
        writer: &mut SourceWriter,
        decl: &Declaration,
        merged: &MergedMethod<'_>,
        notes: &mut Vec<String>,
    ) {
        let method = merged.method;
        let plan = SignaturePlan::for_method(&self.mapper, method);
        let owner = aidl_fq_name(decl.fq_name());

        for comment in plan.removed_comments() {
            writer.line(&comment);
        }
        for removed in &plan.removed {
            notes.push(format!(
                "{owner}: dropped result {} of {}",
                removed.name,
                method.name()
            ));
        }
        if merged.is_renamed() {
            writer.line(&format!(
                "// Changing method name from {} to {}",
                method.name(),
                merged.name
            ));
            notes.push(format!(
                "{owner}: renamed {} to {}",
                method.name(),
                merged.name
            ));
        }
        if let Some(comment) = plan.promotion_comment() {
            writer.line(&comment);
        }
        if let Some(promoted) = &plan.promoted {
            notes.push(format!(
                "{owner}: result {} of {} is now the return value",
                promoted.name,
                method.name()
            ));
        }

        if let Some(doc) = method.doc_comment() {
            let synced = sync_doc_comment(doc, &plan.transformations);
            for line in synced.render() {
                writer.line(&line);
            }
        }

        for line in self.render_signature(merged, &plan, writer.indent_column()) {
            writer.line(&line);
        }
    }

    fn render_signature(
        &self,
        merged: &MergedMethod<'_>,
        plan: &SignaturePlan<'_>,
        start_column: usize,
    ) -> Vec<String> {
        let method = merged.method;
        let mut printer = WrappedLinePrinter::new(self.options.max_line_length)
            .with_start_column(start_column)
            .with_continuation_indent(self.options.continuation_indent());

        if method.is_oneway() {
            printer.write("oneway ");
        }
        printer.write(&format!("{} {}(", plan.return_type, merged.name));

        let params: Vec<String> = method
            .args()
            .iter()
            .map(|arg| format!("in {} {}", self.mapper.map_type(&arg.ty), arg.name))
            .chain(
                plan.out_params
                    .iter()
                    .map(|res| format!("out {} {}", self.mapper.map_type(&res.ty), res.name)),
            )
            .collect();

        if params.is_empty() {
            printer.write(");");
        }
        let last = params.len().saturating_sub(1);
        for (index, param) in params.iter().enumerate() {
            let separator = if index == last { ");" } else { "," };
            printer.group(&format!("{param}{separator}"));
        }

        printer.finish()
    }

    fn render_compound(
        &self,
        id: DeclId,
        decl: &Declaration,
        compound: &CompoundType,
        writer: &mut SourceWriter,
    ) {
        let imports = ImportSet::for_declaration(self.ast, id, None);
        self.write_header(writer, decl, &imports);

        let keyword = match compound.kind() {
            CompoundKind::Struct => "parcelable",
            CompoundKind::Union => "union",
        };
        writer.line(&format!("{keyword} {} {{", aidl_name(decl.fq_name())));
        writer.increase_indent();
        for field in compound.fields() {
            if let Some(doc) = &field.doc_comment {
                for line in doc.render() {
                    writer.line(&line);
                }
            }
            writer.line(&format!("{} {};", self.mapper.map_type(&field.ty), field.name));
        }
        writer.decrease_indent();
        writer.line("}");
    }
}

#[cfg(test)]
#[path = "tests/file_emitter_tests.rs"]
mod tests;
