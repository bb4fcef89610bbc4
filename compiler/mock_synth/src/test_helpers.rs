//! Shared fixtures for unit tests.

use mock_ir::{
    ContractId, ContractTable, EventDescriptor, InterfaceContract, MethodSignature, Param,
    PropertyDescriptor, TypeRef,
};

pub(crate) fn ty(keyword: &str) -> TypeRef {
    TypeRef::builtin(keyword).unwrap_or_else(|| panic!("`{keyword}` is not a builtin type"))
}

pub(crate) fn method(name: &str, ret: &str, params: &[&str]) -> MethodSignature {
    let params = params
        .iter()
        .enumerate()
        .map(|(i, p)| Param::new(format!("arg{i}"), ty(p)))
        .collect();
    MethodSignature::new(name, ty(ret), params)
}

pub(crate) fn insert(table: &mut ContractTable, contract: InterfaceContract) -> ContractId {
    table.insert(contract).unwrap_or_else(|e| panic!("{e}"))
}

/// Ids of a diamond: `IC : IA, IB`, with `IA : IBase` and `IB : IBase`.
pub(crate) struct Diamond {
    pub base: ContractId,
    pub left: ContractId,
    pub right: ContractId,
    pub top: ContractId,
}

/// `IBase` declares `M()` and a read-write `Id`; both arms redeclare `M()`;
/// the left arm adds `Left()`, the right arm adds `Right(int)` and an event.
pub(crate) fn diamond(table: &mut ContractTable) -> Diamond {
    let base = insert(
        table,
        InterfaceContract::interface("Acme", "IBase")
            .with_method(method("M", "void", &[]))
            .with_property(PropertyDescriptor::read_write("Id", ty("int"))),
    );
    let left = insert(
        table,
        InterfaceContract::interface("Acme", "IA")
            .with_method(method("M", "void", &[]))
            .with_method(method("Left", "string", &[]))
            .with_base(base),
    );
    let right = insert(
        table,
        InterfaceContract::interface("Acme", "IB")
            .with_method(method("M", "void", &[]))
            .with_method(method("Right", "double", &["int"]))
            .with_event(EventDescriptor::new(
                "Changed",
                TypeRef::reference("EventHandler"),
            ))
            .with_base(base),
    );
    let top = insert(
        table,
        InterfaceContract::interface("Acme", "IC")
            .with_base(left)
            .with_base(right),
    );
    Diamond {
        base,
        left,
        right,
        top,
    }
}
