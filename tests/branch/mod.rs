mod branch_creates_a_pointer_at_head;
