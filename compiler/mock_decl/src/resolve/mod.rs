//! Name resolution: syntax tree to [`ContractTable`].
//!
//! Runs in three passes so declarations may refer to each other in any order:
//!
//! 1. Register every declaration, rejecting duplicates.
//! 2. Build one contract per declaration, resolving member types against the
//!    declared value types (`struct`, `enum`).
//! 3. Resolve each interface's base list, then reject inheritance cycles.

use mock_ir::{
    ContractId, ContractKind, ContractTable, EventDescriptor, InterfaceContract, MethodSignature,
    Param, PropertyDescriptor, QualifiedName, TypeKind, TypeRef,
};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::ast::{DeclFile, MemberDecl, TypeDecl, TypeExpr};
use crate::{DeclError, Span};

/// Build a contract table from a parsed file.
///
/// Every error is collected. The returned table holds whatever could be
/// resolved, which is the whole file when the error list is empty.
pub fn resolve(file: &DeclFile) -> (ContractTable, Vec<DeclError>) {
    let mut resolver = Resolver::default();
    let kept = resolver.register(file);

    let mut table = ContractTable::new();
    let mut declared: Vec<(ContractId, &TypeDecl)> = Vec::with_capacity(kept.len());
    for decl in kept {
        let contract = resolver.contract(decl);
        match table.insert(contract) {
            Ok(id) => declared.push((id, decl)),
            Err(error) => debug!(%error, "declaration skipped"),
        }
    }

    for &(id, decl) in &declared {
        if decl.kind == ContractKind::Interface {
            resolver.link_bases(&mut table, id, decl);
        }
    }
    resolver.check_cycles(&table, &declared);

    (table, resolver.errors)
}

#[derive(Default)]
struct Resolver {
    /// Kind and name span of every registered declaration.
    kinds: FxHashMap<QualifiedName, (ContractKind, Span)>,
    errors: Vec<DeclError>,
}

impl Resolver {
    fn register<'a>(&mut self, file: &'a DeclFile) -> Vec<&'a TypeDecl> {
        let mut kept = Vec::with_capacity(file.decls.len());
        for decl in &file.decls {
            let name = QualifiedName::new(decl.namespace.clone(), decl.name.clone());
            if let Some(&(_, first)) = self.kinds.get(&name) {
                self.errors.push(DeclError::DuplicateType {
                    name,
                    span: decl.name_span,
                    first,
                });
                continue;
            }
            self.kinds.insert(name, (decl.kind, decl.name_span));
            kept.push(decl);
        }
        kept
    }

    /// Look `path` up in `namespace`, then as a fully qualified name.
    fn lookup(&self, namespace: &str, path: &str) -> Option<(QualifiedName, ContractKind)> {
        let local = if namespace.is_empty() {
            None
        } else {
            Some(QualifiedName::parse(&format!("{namespace}.{path}")))
        };
        local
            .into_iter()
            .chain(std::iter::once(QualifiedName::parse(path)))
            .find_map(|name| {
                let (kind, _) = *self.kinds.get(&name)?;
                Some((name, kind))
            })
    }

    fn contract(&self, decl: &TypeDecl) -> InterfaceContract {
        let mut contract = InterfaceContract::new(&decl.namespace, &decl.name, decl.kind);
        for member in &decl.members {
            match member {
                MemberDecl::Method {
                    name,
                    return_type,
                    params,
                } => {
                    let params = params
                        .iter()
                        .map(|p| Param::new(&p.name, self.type_ref(&decl.namespace, &p.ty)))
                        .collect();
                    contract.methods.push(MethodSignature::new(
                        name,
                        self.type_ref(&decl.namespace, return_type),
                        params,
                    ));
                }
                MemberDecl::Property { name, ty, get, set } => {
                    contract.properties.push(PropertyDescriptor::new(
                        name,
                        self.type_ref(&decl.namespace, ty),
                        *get,
                        *set,
                    ));
                }
                MemberDecl::Event { name, ty } => {
                    contract
                        .events
                        .push(EventDescriptor::new(name, self.type_ref(&decl.namespace, ty)));
                }
            }
        }
        contract
    }

    /// Resolve a written type to a [`TypeRef`].
    ///
    /// Declared types are named by their fully qualified name, so the name
    /// stays valid outside the declaring namespace. Unknown names are external
    /// reference types, kept as written, never an error.
    fn type_ref(&self, namespace: &str, ty: &TypeExpr) -> TypeRef {
        match ty {
            TypeExpr::Named(path) => {
                if let Some(builtin) = TypeRef::builtin(&path.text) {
                    return builtin;
                }
                match self.lookup(namespace, &path.text) {
                    Some((name, kind)) => {
                        let kind = match kind {
                            ContractKind::Struct => TypeKind::Struct,
                            ContractKind::Enum => TypeKind::Enum,
                            _ => TypeKind::Reference,
                        };
                        TypeRef::new(name.to_string(), kind)
                    }
                    None => TypeRef::reference(&path.text),
                }
            }
            TypeExpr::Generic { path, args } => {
                let args: Vec<String> = args
                    .iter()
                    .map(|arg| self.type_ref(namespace, arg).to_string())
                    .collect();
                let path = self
                    .lookup(namespace, &path.text)
                    .map_or_else(|| path.text.clone(), |(name, _)| name.to_string());
                TypeRef::reference(format!("{path}<{}>", args.join(", ")))
            }
            TypeExpr::Array(elem) => {
                TypeRef::reference(format!("{}[]", self.type_ref(namespace, elem)))
            }
            TypeExpr::Nullable(inner) => {
                let inner = self.type_ref(namespace, inner);
                let kind = if inner.kind().is_reference_like() || inner.is_void() {
                    inner.kind()
                } else {
                    TypeKind::Nullable
                };
                TypeRef::new(format!("{inner}?"), kind)
            }
        }
    }

    fn link_bases(&mut self, table: &mut ContractTable, id: ContractId, decl: &TypeDecl) {
        for base in &decl.bases {
            let Some((name, kind)) = self.lookup(&decl.namespace, &base.text) else {
                self.errors.push(DeclError::UnresolvedBase {
                    name: base.text.clone(),
                    span: base.span,
                });
                continue;
            };
            if kind != ContractKind::Interface {
                self.errors.push(DeclError::BaseNotInterface {
                    name,
                    kind,
                    span: base.span,
                });
                continue;
            }
            // Registered names that survived insertion are always in the table.
            if let Some(base_id) = table.lookup(&name) {
                if let Err(error) = table.add_base(id, base_id) {
                    debug!(%error, "base skipped");
                }
                trace!(contract = %decl.name, base = %name, "linked base");
            }
        }
    }

    /// Report every interface that can reach itself through its bases.
    fn check_cycles(&mut self, table: &ContractTable, declared: &[(ContractId, &TypeDecl)]) {
        for &(id, decl) in declared {
            if decl.kind == ContractKind::Interface && reaches(table, id, id) {
                self.errors.push(DeclError::CyclicInheritance {
                    name: table.get(id).qualified_name(),
                    span: decl.name_span,
                });
            }
        }
    }
}

/// Whether `target` is reachable from `from` through at least one base edge.
fn reaches(table: &ContractTable, from: ContractId, target: ContractId) -> bool {
    let mut visited = vec![false; table.len()];
    let mut stack: Vec<ContractId> = table.get(from).bases.clone();
    while let Some(id) = stack.pop() {
        if id == target {
            return true;
        }
        if std::mem::replace(&mut visited[id.index()], true) {
            continue;
        }
        stack.extend(table.get(id).bases.iter().copied());
    }
    false
}
