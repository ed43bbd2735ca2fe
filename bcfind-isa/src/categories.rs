bitflags::bitflags! {
    /// Semantic category membership of an opcode.
    ///
    /// Each flag is a closed, hand-authored set; the pattern grammar exposes
    /// one alias per flag (`branchinstruction`, `loadinstruction`, ...), so
    /// the members here are exactly what those aliases expand to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Categories: u32 {
        /// Transfers control: all conditional and unconditional branches
        /// plus the switch instructions.
        const BRANCH            = 1 << 0;
        /// Loads a local variable onto the operand stack.
        const LOAD              = 1 << 1;
        /// Stores the top of the operand stack into a local variable.
        const STORE             = 1 << 2;
        /// Integer/float arithmetic, shifts, and bitwise logic.
        const ARITHMETIC        = 1 << 3;
        /// Primitive type conversions (`i2l` .. `i2s`).
        const CONVERSION        = 1 << 4;
        /// Raw operand-stack manipulation (`pop` .. `swap`).
        const STACK             = 1 << 5;
        /// Field access (`getstatic` .. `putfield`).
        const FIELD             = 1 << 6;
        /// Carries a constant-pool index operand.
        const CP                = 1 << 7;
        /// Returns from the current method.
        const RETURN            = 1 << 8;
        /// Pushes a constant encoded in the opcode or its immediate.
        const CONSTANT_PUSH     = 1 << 9;
        /// May raise an exception when executed.
        const EXCEPTION_THROWER = 1 << 10;
        /// May trigger loading/resolution of a referenced class.
        const LOAD_CLASS        = 1 << 11;
        /// Pushes a value without consuming operands.
        const PUSH              = 1 << 12;
        /// Consumes stack operands without producing any.
        const POP               = 1 << 13;
        /// Branches unconditionally (`goto`, `jsr` and wide forms).
        const UNCONDITIONAL     = 1 << 14;
        /// Encoded length depends on operand values (switches).
        const VARIABLE_LENGTH   = 1 << 15;
        /// Carries an index operand (local-variable or constant-pool).
        const INDEXED           = 1 << 16;
        /// Operates on a specific primitive/reference type.
        const TYPED             = 1 << 17;
        /// Leaves at least one value on the operand stack.
        const STACK_PRODUCER    = 1 << 18;
        /// Removes at least one value from the operand stack.
        const STACK_CONSUMER    = 1 << 19;
        /// References another instruction as a jump target.
        const TARGETER          = 1 << 20;
        /// Allocates an object or array.
        const ALLOCATION        = 1 << 21;
        /// Subroutine call (`jsr`, `jsr_w`).
        const JSR               = 1 << 22;
        /// Multi-way branch (`tableswitch`, `lookupswitch`).
        const SELECT            = 1 << 23;
        /// Conditional branch (`ifeq` .. `ifle`, compares, null checks).
        const IF                = 1 << 24;
    }
}
